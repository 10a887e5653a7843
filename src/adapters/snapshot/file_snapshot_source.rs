//! File-based Zone Snapshot Adapter
//!
//! Reads the zone dump as a JSON file from disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::LoadError;
use crate::domain::zone::{parse_snapshot, RawZone};
use crate::ports::ZoneSnapshotSource;

/// Snapshot source backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileSnapshotSource::new("data-dump.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ZoneSnapshotSource for FileSnapshotSource {
    async fn fetch(&self) -> Result<Vec<RawZone>, LoadError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Unreadable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        parse_snapshot(&bytes)
    }
}
