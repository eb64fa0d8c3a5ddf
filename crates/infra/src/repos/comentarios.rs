use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::ComentarioRow;

#[derive(Debug, Clone)]
pub struct CreateComentario {
    pub pub_id: Option<i32>,
    pub aut_id: Option<i32>,
    pub com_descripcion: Option<String>,
}

/// Full replacement of the mutable columns; `None` writes NULL.
#[derive(Debug, Clone)]
pub struct UpdateComentario {
    pub pub_id: Option<i32>,
    pub aut_id: Option<i32>,
    pub com_descripcion: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ComentarioRow>> {
    sqlx::query_as::<_, ComentarioRow>(
        r#"
        SELECT com_id, pub_id, aut_id, com_descripcion
        FROM comentario
        ORDER BY com_id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<ComentarioRow>> {
    sqlx::query_as::<_, ComentarioRow>(
        r#"
        SELECT com_id, pub_id, aut_id, com_descripcion
        FROM comentario
        WHERE com_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_publicacion<'e>(
    executor: impl PgExecutor<'e>,
    pub_id: i32,
) -> SqlxResult<Vec<ComentarioRow>> {
    sqlx::query_as::<_, ComentarioRow>(
        r#"
        SELECT com_id, pub_id, aut_id, com_descripcion
        FROM comentario
        WHERE pub_id = $1
        ORDER BY com_id ASC
        "#,
    )
    .bind(pub_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateComentario,
) -> SqlxResult<ComentarioRow> {
    sqlx::query_as::<_, ComentarioRow>(
        r#"
        INSERT INTO comentario (pub_id, aut_id, com_descripcion)
        VALUES ($1, $2, $3)
        RETURNING com_id, pub_id, aut_id, com_descripcion
        "#,
    )
    .bind(data.pub_id)
    .bind(data.aut_id)
    .bind(data.com_descripcion)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
    data: UpdateComentario,
) -> SqlxResult<Option<ComentarioRow>> {
    sqlx::query_as::<_, ComentarioRow>(
        r#"
        UPDATE comentario
        SET pub_id = $1, aut_id = $2, com_descripcion = $3
        WHERE com_id = $4
        RETURNING com_id, pub_id, aut_id, com_descripcion
        "#,
    )
    .bind(data.pub_id)
    .bind(data.aut_id)
    .bind(data.com_descripcion)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Deletes the comment row only. Reactions referencing it must be removed
/// first, see `reacciones::delete_by_comentario`.
pub async fn delete<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<ComentarioRow>> {
    sqlx::query_as::<_, ComentarioRow>(
        r#"
        DELETE FROM comentario
        WHERE com_id = $1
        RETURNING com_id, pub_id, aut_id, com_descripcion
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
