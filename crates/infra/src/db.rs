use sqlx::PgPool;

/// Shared connection pool handed to every repo function and loader.
pub type Db = PgPool;
