use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::AutorRow;

#[derive(Debug, Clone)]
pub struct CreateAutor {
    pub aut_usuario: Option<String>,
    pub aut_nombre: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<AutorRow>> {
    sqlx::query_as::<_, AutorRow>(
        r#"
        SELECT aut_id, aut_usuario, aut_nombre
        FROM autor
        ORDER BY aut_id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> SqlxResult<Option<AutorRow>> {
    sqlx::query_as::<_, AutorRow>(
        r#"
        SELECT aut_id, aut_usuario, aut_nombre
        FROM autor
        WHERE aut_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[i32],
) -> SqlxResult<Vec<AutorRow>> {
    sqlx::query_as::<_, AutorRow>(
        r#"
        SELECT aut_id, aut_usuario, aut_nombre
        FROM autor
        WHERE aut_id = ANY($1::int[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateAutor) -> SqlxResult<AutorRow> {
    sqlx::query_as::<_, AutorRow>(
        r#"
        INSERT INTO autor (aut_usuario, aut_nombre)
        VALUES ($1, $2)
        RETURNING aut_id, aut_usuario, aut_nombre
        "#,
    )
    .bind(data.aut_usuario)
    .bind(data.aut_nombre)
    .fetch_one(executor)
    .await
}
