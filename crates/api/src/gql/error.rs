use std::sync::Arc;

/// Unified error type for GraphQL query resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so wrapping a database error in `GqlError` before `?` logs the detail
/// server side and shows a sanitized message to clients.
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    /// Errors coming back from a `DataLoader`, which shares them between callers.
    Loader(Arc<sqlx::Error>),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                tracing::error!("Database error: {e}");
            }
            GqlError::Loader(e) => {
                tracing::error!("Database error in loader: {e}");
            }
        }
        write!(f, "Internal database error")
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<Arc<sqlx::Error>> for GqlError {
    fn from(e: Arc<sqlx::Error>) -> Self {
        GqlError::Loader(e)
    }
}

/// Extension trait for mutation results.
///
/// Usage: `comentarios::create(&state.db, data).await.or_fail("create comentario")?`
/// logs the underlying error and surfaces `Failed to create comentario`.
pub trait ResultExt<T> {
    fn or_fail(self, action: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn or_fail(self, action: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| {
            tracing::error!(action, "Mutation failed: {e}");
            async_graphql::Error::new(format!("Failed to {action}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_fail_hides_cause() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
        let err = result.or_fail("update comentario").unwrap_err();
        assert_eq!(err.message, "Failed to update comentario");
    }

    #[test]
    fn test_or_fail_passes_ok_through() {
        let result: Result<i32, sqlx::Error> = Ok(7);
        assert_eq!(result.or_fail("create autor").unwrap(), 7);
    }

    #[test]
    fn test_gql_error_is_sanitized() {
        let err = GqlError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Internal database error");

        let shared = GqlError::from(Arc::new(sqlx::Error::PoolClosed));
        let gql: async_graphql::Error = shared.into();
        assert_eq!(gql.message, "Internal database error");
    }
}
