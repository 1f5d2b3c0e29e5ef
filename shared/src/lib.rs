//! Food Finder Shared Library
//!
//! This crate contains the domain types and query-shaping utilities used
//! by the backend's credential-store and directory-aggregation layers.

pub mod query;
pub mod types;

// Re-export commonly used items
pub use types::*;
