use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::PublicacionRow;

#[derive(Debug, Clone)]
pub struct CreatePublicacion {
    pub cat_id: Option<i32>,
    pub aut_id: Option<i32>,
    pub pub_titulo: Option<String>,
    pub pub_descripcion: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PublicacionRow>> {
    sqlx::query_as::<_, PublicacionRow>(
        r#"
        SELECT pub_id, cat_id, aut_id, pub_titulo, pub_descripcion
        FROM publicacion
        ORDER BY pub_id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<PublicacionRow>> {
    sqlx::query_as::<_, PublicacionRow>(
        r#"
        SELECT pub_id, cat_id, aut_id, pub_titulo, pub_descripcion
        FROM publicacion
        WHERE pub_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[i32],
) -> SqlxResult<Vec<PublicacionRow>> {
    sqlx::query_as::<_, PublicacionRow>(
        r#"
        SELECT pub_id, cat_id, aut_id, pub_titulo, pub_descripcion
        FROM publicacion
        WHERE pub_id = ANY($1::int[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreatePublicacion,
) -> SqlxResult<PublicacionRow> {
    sqlx::query_as::<_, PublicacionRow>(
        r#"
        INSERT INTO publicacion (cat_id, aut_id, pub_titulo, pub_descripcion)
        VALUES ($1, $2, $3, $4)
        RETURNING pub_id, cat_id, aut_id, pub_titulo, pub_descripcion
        "#,
    )
    .bind(data.cat_id)
    .bind(data.aut_id)
    .bind(data.pub_titulo)
    .bind(data.pub_descripcion)
    .fetch_one(executor)
    .await
}
