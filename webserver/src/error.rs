//! WebServer-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}")]
    ServerStartupFailed { address: String },

    #[error("Catalog could not be loaded from {source_name}: {message}")]
    CatalogLoadFailed { source_name: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn catalog(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        WebServerError::CatalogLoadFailed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
