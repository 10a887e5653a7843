//! Storage Adapters
//!
//! Implementations of the PortalStore port that live in process.
//!
//! ## Available Adapters
//!
//! - **InMemoryPortalStore** - Stores portals in memory (testing/development)
//!
//! The production store is `adapters::postgres::PostgresPortalStore`.

mod in_memory_portal_store;

pub use in_memory_portal_store::InMemoryPortalStore;
