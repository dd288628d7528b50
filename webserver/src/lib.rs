//! Course cart web server
//!
//! Serves a fixed course catalog, lets a single session pick up to a fixed
//! number of courses, rank them, and check out to a receipt view.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{CliOverrides, Settings};
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::CatalogProvider;

// Re-export service implementations
pub use services::JsonCatalogProvider;
