//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a portal row.
///
/// Only the storage collaborator mints these; the domain never invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortalId(i64);

impl PortalId {
    /// Wraps an identifier handed out by storage.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw storage identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PortalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
