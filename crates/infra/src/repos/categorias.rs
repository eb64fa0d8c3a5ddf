use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::CategoriaRow;

#[derive(Debug, Clone)]
pub struct CreateCategoria {
    pub cat_titulo: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<CategoriaRow>> {
    sqlx::query_as::<_, CategoriaRow>(
        r#"
        SELECT cat_id, cat_titulo
        FROM categoria
        ORDER BY cat_id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<CategoriaRow>> {
    sqlx::query_as::<_, CategoriaRow>(
        r#"
        SELECT cat_id, cat_titulo
        FROM categoria
        WHERE cat_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[i32],
) -> SqlxResult<Vec<CategoriaRow>> {
    sqlx::query_as::<_, CategoriaRow>(
        r#"
        SELECT cat_id, cat_titulo
        FROM categoria
        WHERE cat_id = ANY($1::int[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateCategoria,
) -> SqlxResult<CategoriaRow> {
    sqlx::query_as::<_, CategoriaRow>(
        r#"
        INSERT INTO categoria (cat_titulo)
        VALUES ($1)
        RETURNING cat_id, cat_titulo
        "#,
    )
    .bind(data.cat_titulo)
    .fetch_one(executor)
    .await
}
