use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::ReaccionRow;

pub async fn list_by_comentario<'e>(
    executor: impl PgExecutor<'e>,
    com_id: i32,
) -> SqlxResult<Vec<ReaccionRow>> {
    sqlx::query_as::<_, ReaccionRow>(
        r#"
        SELECT rea_id, com_id, rea_like
        FROM reaccion
        WHERE com_id = $1
        ORDER BY rea_id ASC
        "#,
    )
    .bind(com_id)
    .fetch_all(executor)
    .await
}

/// Number of reactions on a comment with `rea_like = true`.
pub async fn count_likes<'e>(executor: impl PgExecutor<'e>, com_id: i32) -> SqlxResult<i32> {
    sqlx::query_scalar::<_, i32>(
        r#"
        SELECT COUNT(*)::INT
        FROM reaccion
        WHERE com_id = $1 AND rea_like = true
        "#,
    )
    .bind(com_id)
    .fetch_one(executor)
    .await
}

/// Returns the number of deleted reactions.
pub async fn delete_by_comentario<'e>(
    executor: impl PgExecutor<'e>,
    com_id: i32,
) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM reaccion WHERE com_id = $1")
        .bind(com_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
