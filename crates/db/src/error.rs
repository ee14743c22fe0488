use dtp_core::error::CoreError;

/// Errors raised by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error (not found, validation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The SQLite medium failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying the medium's schema failed.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A stored collection could not be decoded.
    #[error("Corrupt collection '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be encoded for writing.
    #[error("Encoding error: {0}")]
    Encode(#[source] serde_json::Error),
}
