//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod receipt;

// Re-export commonly used types
pub use cart::{
    AddOutcome, CartStore, CheckoutSnapshot, DEFAULT_MAX_ITEMS, RemoveOutcome, ReorderOutcome,
    ReorderRejection, splice_reorder,
};
pub use catalog::Catalog;
pub use filter::{CourseFilter, ExpandedSet, LevelFilter, SELECTABLE_LEVELS, filter_courses};
pub use receipt::Receipt;
