//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod catalog_provider;

// Re-export service implementations
pub use catalog_provider::JsonCatalogProvider;

#[cfg(test)]
mod tests;
