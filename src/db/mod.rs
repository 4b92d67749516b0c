/// Database access layer for blog-service
///
/// Repositories are thin sqlx wrappers; cascade behavior (account deletion
/// removing posts/comments/follows, group deletion nulling post references)
/// lives in the schema, see `migrations/`.
pub mod account_repo;
pub mod comment_repo;
pub mod follow_repo;
pub mod group_repo;
pub mod post_repo;

use crate::config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Build the PostgreSQL connection pool from configuration.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&cfg.url)
        .await
}
