//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PortalStore` - Relational storage of portal records
//! - `ZoneSnapshotSource` - The static zone dump the catalog is built from

mod portal_store;
mod zone_snapshot_source;

pub use portal_store::PortalStore;
pub use zone_snapshot_source::ZoneSnapshotSource;
