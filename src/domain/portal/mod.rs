//! Portal domain module.
//!
//! Portals are directed, sized, time-limited links between two zones.
//! They are keyed by `(source, target)` and replaced wholesale on re-add.

mod model;
mod size;

pub use model::{NewPortal, Portal, PortalKey};
pub use size::PortalSize;
