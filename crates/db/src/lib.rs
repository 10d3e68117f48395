use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod adapter;
#[cfg(feature = "embedded-db")]
pub mod embedded;
pub mod models;
pub mod repositories;
pub mod schema;

pub use adapter::{Database, DatabaseConfig, DatabaseMode, DbError, SqlParam};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
