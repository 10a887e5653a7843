//! Snapshot Adapters
//!
//! Implementations of the ZoneSnapshotSource port.

mod file_snapshot_source;

pub use file_snapshot_source::FileSnapshotSource;
