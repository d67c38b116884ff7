/// Database access layer
///
/// This module provides:
/// - Connection pool creation
/// - Idempotent schema bootstrap
/// - Repositories for thoughts and feedback
pub mod feedback_repo;
pub mod schema;
pub mod thought_repo;

pub use schema::ensure_schema;

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Create the shared PostgreSQL connection pool.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}
