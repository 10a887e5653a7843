//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the mapper domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{LoadError, StoreError, ValidationError};
pub use ids::PortalId;
pub use timestamp::{Timestamp, STORAGE_FORMAT};
