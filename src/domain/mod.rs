//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, IDs, errors)
//! - `zone` - Zone topology and the catalog loaded from the snapshot
//! - `portal` - Portal records, keys and sizes

pub mod foundation;
pub mod portal;
pub mod zone;
