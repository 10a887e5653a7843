//! Raw zone descriptors as produced by the game data dump.
//!
//! Field names follow the dump exactly: zones use plain keys, resources and
//! markers carry XML-derived `@`-prefixed attributes.

use serde::Deserialize;

use crate::domain::foundation::LoadError;

/// One zone entry of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawZone {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub zone_type: String,

    #[serde(default)]
    pub resources: Option<Vec<RawResource>>,

    #[serde(default)]
    pub markers: Option<Vec<RawMarker>>,
}

/// Resource node attached to a zone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawResource {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "@tier", default)]
    pub tier: String,
}

/// Map marker attached to a zone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawMarker {
    #[serde(rename = "@type", default)]
    pub marker_type: String,
}

/// Parses a JSON snapshot: a top-level array of zone descriptors.
pub fn parse_snapshot(bytes: &[u8]) -> Result<Vec<RawZone>, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed(e.to_string()))
}
