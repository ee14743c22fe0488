//! Persistence for the Design Thinking Platform.
//!
//! Projects, documents, and the template catalog live as three JSON
//! collections inside a key-value [`medium`]. The [`store::Store`] handle
//! serializes access and the [`repositories`] implement the operations.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod error;
pub mod medium;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::Store;

pub type DbPool = sqlx::SqlitePool;

/// `DATABASE_URL` value that selects the in-process medium.
pub const MEMORY_URL: &str = "memory";

/// Create a connection pool from a SQLite URL, creating the file if needed.
///
/// In-memory SQLite databases are private to one connection, so such URLs
/// get a single-connection pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Run a trivial query to confirm the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Open a [`Store`] for `database_url`.
///
/// [`MEMORY_URL`] yields a fresh in-memory store; anything else is treated
/// as a SQLite URL, migrated and wrapped in a [`medium::SqliteMedium`].
pub async fn open_store(database_url: &str) -> Result<Store, StoreError> {
    if database_url == MEMORY_URL {
        tracing::warn!("Using in-memory storage; data will not survive a restart");
        return Ok(Store::in_memory());
    }

    let pool = create_pool(database_url).await?;
    health_check(&pool).await?;
    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Store::new(Arc::new(medium::SqliteMedium::new(pool))))
}
