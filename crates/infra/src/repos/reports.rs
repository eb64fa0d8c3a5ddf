//! Read-only reporting queries joining across the blog tables.
//!
//! All joins are LEFT JOINs so parents without children still produce a row,
//! with the child columns set to NULL. Counts are cast to `INT` so they map
//! straight onto GraphQL `Int`.

use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{
    AutorEstadisticaRow, AutorPublicacionRow, CategoriaResumenRow, ComentarioLikesRow,
    PublicacionComentarioRow, PublicacionNumeroComentariosRow,
};

/// Every publication with each of its comments and the commenter's username.
pub async fn publicaciones_con_comentarios<'e>(
    executor: impl PgExecutor<'e>,
) -> SqlxResult<Vec<PublicacionComentarioRow>> {
    sqlx::query_as::<_, PublicacionComentarioRow>(
        r#"
        SELECT p.pub_id, p.pub_titulo, a.aut_usuario, c.com_descripcion
        FROM publicacion p
        LEFT JOIN comentario c ON p.pub_id = c.pub_id
        LEFT JOIN autor a ON c.aut_id = a.aut_id
        ORDER BY p.pub_id, c.com_id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn autores_con_publicaciones<'e>(
    executor: impl PgExecutor<'e>,
) -> SqlxResult<Vec<AutorPublicacionRow>> {
    sqlx::query_as::<_, AutorPublicacionRow>(
        r#"
        SELECT a.aut_usuario, a.aut_nombre, p.pub_titulo, p.pub_descripcion
        FROM autor a
        LEFT JOIN publicacion p ON a.aut_id = p.aut_id
        ORDER BY a.aut_id, p.pub_id
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Same shape as [`publicaciones_con_comentarios`], restricted to one publication.
pub async fn comentarios_por_publicacion<'e>(
    executor: impl PgExecutor<'e>,
    pub_id: i32,
) -> SqlxResult<Vec<PublicacionComentarioRow>> {
    sqlx::query_as::<_, PublicacionComentarioRow>(
        r#"
        SELECT p.pub_id, p.pub_titulo, a.aut_usuario, c.com_descripcion
        FROM publicacion p
        LEFT JOIN comentario c ON p.pub_id = c.pub_id
        LEFT JOIN autor a ON c.aut_id = a.aut_id
        WHERE p.pub_id = $1
        ORDER BY c.com_id
        "#,
    )
    .bind(pub_id)
    .fetch_all(executor)
    .await
}

pub async fn publicaciones_con_numero_comentarios<'e>(
    executor: impl PgExecutor<'e>,
) -> SqlxResult<Vec<PublicacionNumeroComentariosRow>> {
    sqlx::query_as::<_, PublicacionNumeroComentariosRow>(
        r#"
        SELECT p.pub_titulo, COUNT(c.com_id)::INT AS numero_comentarios
        FROM publicacion p
        LEFT JOIN comentario c ON p.pub_id = c.pub_id
        GROUP BY p.pub_id, p.pub_titulo
        ORDER BY p.pub_id
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Like count for every comment of one publication.
pub async fn publicacion_comentarios_likes<'e>(
    executor: impl PgExecutor<'e>,
    pub_id: i32,
) -> SqlxResult<Vec<ComentarioLikesRow>> {
    sqlx::query_as::<_, ComentarioLikesRow>(
        r#"
        SELECT p.pub_titulo,
               c.com_descripcion,
               COUNT(CASE WHEN r.rea_like = true THEN 1 END)::INT AS numero_likes
        FROM publicacion p
        LEFT JOIN comentario c ON p.pub_id = c.pub_id
        LEFT JOIN reaccion r ON c.com_id = r.com_id
        WHERE p.pub_id = $1
        GROUP BY p.pub_titulo, c.com_id, c.com_descripcion
        ORDER BY c.com_id
        "#,
    )
    .bind(pub_id)
    .fetch_all(executor)
    .await
}

/// One row per (category, publication, comment) with its likes and the number
/// of distinct authors who commented.
pub async fn categorias_publicaciones_completas<'e>(
    executor: impl PgExecutor<'e>,
) -> SqlxResult<Vec<CategoriaResumenRow>> {
    sqlx::query_as::<_, CategoriaResumenRow>(
        r#"
        SELECT cat.cat_titulo AS categoria,
               p.pub_titulo,
               c.com_descripcion,
               COUNT(CASE WHEN r.rea_like = true THEN 1 END)::INT AS numero_likes,
               COUNT(DISTINCT c.aut_id)::INT AS numero_autores_comentarios
        FROM categoria cat
        LEFT JOIN publicacion p ON cat.cat_id = p.cat_id
        LEFT JOIN comentario c ON p.pub_id = c.pub_id
        LEFT JOIN reaccion r ON c.com_id = r.com_id
        GROUP BY cat.cat_id, cat.cat_titulo, p.pub_id, p.pub_titulo, c.com_id, c.com_descripcion
        ORDER BY cat.cat_id, p.pub_id, c.com_id
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Per author and category: distinct publications written and likes received
/// on the comments of those publications.
pub async fn autores_estadisticas<'e>(
    executor: impl PgExecutor<'e>,
) -> SqlxResult<Vec<AutorEstadisticaRow>> {
    sqlx::query_as::<_, AutorEstadisticaRow>(
        r#"
        SELECT a.aut_nombre,
               cat.cat_titulo AS categoria,
               COUNT(DISTINCT p.pub_id)::INT AS numero_publicaciones,
               COUNT(CASE WHEN r.rea_like = true THEN 1 END)::INT AS numero_likes
        FROM autor a
        LEFT JOIN publicacion p ON a.aut_id = p.aut_id
        LEFT JOIN categoria cat ON p.cat_id = cat.cat_id
        LEFT JOIN comentario c ON p.pub_id = c.pub_id
        LEFT JOIN reaccion r ON c.com_id = r.com_id
        GROUP BY a.aut_id, a.aut_nombre, cat.cat_id, cat.cat_titulo
        ORDER BY a.aut_id, cat.cat_id
        "#,
    )
    .fetch_all(executor)
    .await
}
