//! Storage-specific error type wrapping sqlx errors.

use innkeep_domain::error::InnkeepError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to serialize a value stored as JSON.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for InnkeepError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
