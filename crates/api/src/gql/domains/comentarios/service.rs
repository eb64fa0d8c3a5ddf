use sqlx::PgPool;

use infra::models::ComentarioRow;
use infra::repos::{comentarios, reacciones};

/// Delete a comment together with its reactions.
///
/// Both statements run in one transaction: either the reactions and the
/// comment are gone, or nothing changed. Rolls back and fails with
/// `RowNotFound` when no comment has the given id.
pub async fn delete_comentario(pool: &PgPool, com_id: i32) -> Result<ComentarioRow, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let removed_reactions = reacciones::delete_by_comentario(&mut *tx, com_id).await?;
    let deleted = comentarios::delete(&mut *tx, com_id).await?;

    match deleted {
        Some(row) => {
            tx.commit().await?;
            tracing::info!(com_id, removed_reactions, "Deleted comentario");
            Ok(row)
        }
        None => {
            tx.rollback().await?;
            Err(sqlx::Error::RowNotFound)
        }
    }
}
