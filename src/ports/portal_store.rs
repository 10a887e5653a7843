//! Portal store port.
//!
//! Defines the contract for persisting portal records in the relational
//! collaborator. Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Upsert by natural key**: `add` replaces any portal sharing `(source, target)`
//! - **No referential checks**: zone names are validated upstream, not here
//! - **No retries**: a single collaborator failure is surfaced immediately
//! - **No in-process locking**: mutual exclusion is left to the database

use async_trait::async_trait;

use crate::domain::foundation::{StoreError, Timestamp};
use crate::domain::portal::{NewPortal, Portal, PortalKey};

/// Repository port for portal persistence.
#[async_trait]
pub trait PortalStore: Send + Sync {
    /// Set the current portal between two zones.
    ///
    /// Any stored portal with the same `(source, target)` is fully replaced,
    /// size and expiry included. Concurrent adds on one key resolve
    /// last-write-wins.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on persistence failure
    async fn add(&self, portal: &NewPortal) -> Result<(), StoreError>;

    /// All stored portals, with minutes remaining computed at call time.
    ///
    /// Expired portals that have not been swept yet are included.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on query failure
    /// - `InvalidTimestamp` / `InvalidRow` when a stored row does not decode
    async fn list(&self) -> Result<Vec<Portal>, StoreError>;

    /// Delete a portal by its storage identifier.
    ///
    /// Deleting an identifier that no longer exists is not an error.
    async fn remove(&self, portal: &Portal) -> Result<(), StoreError>;

    /// Delete the portal stored under `key` only if it still expires
    /// strictly before `cutoff`.
    ///
    /// The check and delete happen in one statement, so a portal renewed
    /// after it was listed survives. Returns whether a row was deleted.
    async fn remove_expired(&self, key: &PortalKey, cutoff: Timestamp)
        -> Result<bool, StoreError>;

    /// Cheap round trip to confirm the collaborator is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
