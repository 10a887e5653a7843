//! Zone catalog configuration

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::zone::MarkerNames;

/// Where the zone snapshot comes from and how its markers are named
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON zone dump
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Marker renames layered over the built-in table (raw tag -> display name)
    #[serde(default)]
    pub marker_names: HashMap<String, String>,
}

impl CatalogConfig {
    /// The built-in rename table with configured overrides applied
    pub fn marker_names(&self) -> MarkerNames {
        MarkerNames::default().with_overrides(self.marker_names.clone())
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("CATALOG__SNAPSHOT_PATH"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            marker_names: HashMap::new(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data-dump.json")
}
