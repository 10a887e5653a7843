//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPortalStore` - The `portals` table behind the PortalStore port

mod portal_store;

pub use portal_store::{PostgresPortalStore, MIGRATOR};
