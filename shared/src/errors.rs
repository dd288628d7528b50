//! Shared error types for the course cart

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Catalog parse failed: {message}")]
    CatalogParse { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        SharedError::CatalogParse {
            message: err.to_string(),
        }
    }
}
