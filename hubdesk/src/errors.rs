use hubdesk_nav::PersistenceError;
use thiserror::Error;

/// Errors emitted by the JSON state file.
#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for PersistenceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(err) => PersistenceError::Io(err),
            StorageError::Json(err) => PersistenceError::Json(err),
        }
    }
}

/// Errors emitted while loading the app configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
