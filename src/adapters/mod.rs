//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Portal persistence in PostgreSQL
//! - `storage` - In-process portal store (tests, development)
//! - `snapshot` - Zone dump read from disk

pub mod postgres;
pub mod snapshot;
pub mod storage;

pub use postgres::PostgresPortalStore;
pub use snapshot::FileSnapshotSource;
pub use storage::InMemoryPortalStore;
