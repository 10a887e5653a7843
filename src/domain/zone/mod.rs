//! Zone domain module.
//!
//! Turns the static zone dump into the normalized catalog the rest of the
//! system validates portals against.

mod catalog;
mod color;
mod marker_names;
mod model;
mod snapshot;

pub use catalog::ZoneCatalog;
pub use color::{ZoneColor, KNOWN_COLORS};
pub use marker_names::MarkerNames;
pub use model::{Resource, Zone};
pub use snapshot::{parse_snapshot, RawMarker, RawResource, RawZone};
