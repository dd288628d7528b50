//! Web layer: route handlers and HTML rendering

pub mod handlers;
pub mod render;
