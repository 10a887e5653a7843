//! Portal command handlers.

mod add_portal;

pub use add_portal::{AddPortalCommand, AddPortalError, AddPortalHandler, AddPortalResult};
