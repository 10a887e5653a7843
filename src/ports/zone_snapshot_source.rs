//! Zone snapshot source port.
//!
//! Supplies the raw zone descriptors the catalog is built from.

use async_trait::async_trait;

use crate::domain::foundation::LoadError;
use crate::domain::zone::RawZone;

/// Port for reading the static zone snapshot.
#[async_trait]
pub trait ZoneSnapshotSource: Send + Sync {
    /// Read and parse the snapshot.
    ///
    /// # Errors
    ///
    /// - `Unreadable` if the snapshot cannot be read
    /// - `Malformed` if it is not a list of zone descriptors
    async fn fetch(&self) -> Result<Vec<RawZone>, LoadError>;
}
