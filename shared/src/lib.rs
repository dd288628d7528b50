//! Shared types for the course cart
//!
//! Holds the course data model, the checkout navigation format and the
//! logging bootstrap used by the web server.

pub mod checkout;
pub mod errors;
pub mod logging;
pub mod types;

pub use checkout::{checkout_location, decode_checkout_query, encode_checkout_query, parse_course_ids};
pub use errors::*;
pub use logging::Component;
pub use types::*;
