//! Application layer - Services and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod lifecycle;

pub use handlers::{AddPortalCommand, AddPortalError, AddPortalHandler, AddPortalResult};
pub use lifecycle::{PortalLifecycleManager, SweepReport};
