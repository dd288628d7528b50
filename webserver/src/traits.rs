//! Service trait definitions for dependency injection
//!
//! Catalog I/O is abstracted behind these traits for testability

use async_trait::async_trait;

use crate::core::Catalog;
use crate::error::WebServerResult;

/// Source of the read-only course catalog
#[mockall::automock]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load the full catalog once at startup
    async fn load(&self) -> WebServerResult<Catalog>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}
