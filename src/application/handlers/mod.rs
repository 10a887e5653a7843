//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod portal;

pub use portal::{AddPortalCommand, AddPortalError, AddPortalHandler, AddPortalResult};
