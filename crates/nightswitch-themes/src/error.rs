//! Error types for the themes module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] nightswitch_storage::StorageError),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
