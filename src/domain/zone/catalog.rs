//! The in-memory zone catalog.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use super::marker_names::MarkerNames;
use super::model::Zone;
use super::snapshot::RawZone;
use crate::domain::foundation::LoadError;
use crate::ports::ZoneSnapshotSource;

/// Process-wide, read-mostly set of zones.
///
/// Readers get an `Arc` to a complete snapshot. A load builds the new zone
/// list off to the side and swaps the reference in one step, so a reader
/// sees either the old catalog or the new one, never a mix.
#[derive(Debug)]
pub struct ZoneCatalog {
    zones: RwLock<Arc<[Zone]>>,
    marker_names: MarkerNames,
}

impl ZoneCatalog {
    /// Creates an empty catalog that renames markers with `marker_names`.
    pub fn new(marker_names: MarkerNames) -> Self {
        Self {
            zones: RwLock::new(Arc::from(Vec::new())),
            marker_names,
        }
    }

    /// Fetches a snapshot from `source` and replaces the catalog with it.
    ///
    /// On error the previous contents stay in place.
    ///
    /// # Errors
    ///
    /// - `LoadError` when the snapshot cannot be read or parsed
    pub async fn load(&self, source: &dyn ZoneSnapshotSource) -> Result<usize, LoadError> {
        let raw = source.fetch().await?;
        Ok(self.replace_with(raw))
    }

    /// Normalizes `raw` and swaps it in as the whole catalog.
    ///
    /// Returns the number of zones now held.
    pub fn replace_with(&self, raw: Vec<RawZone>) -> usize {
        let zones: Vec<Zone> = raw
            .into_iter()
            .map(|r| Zone::from_raw(r, &self.marker_names))
            .collect();

        for zone in &zones {
            if zone.color().is_unmapped() {
                if is_truncated_openpvp(zone.zone_type()) {
                    warn!(
                        zone = zone.name(),
                        zone_type = zone.zone_type(),
                        "Open PvP zone type has no color segment, leaving it uncolored"
                    );
                } else {
                    debug!(zone = zone.name(), zone_type = zone.zone_type(), "Zone type has no color mapping");
                }
            } else if !zone.color().is_known() {
                warn!(
                    zone = zone.name(),
                    color = zone.color().as_str(),
                    "Zone derived a color the map cannot render"
                );
            }
        }

        let count = zones.len();
        let zones: Arc<[Zone]> = Arc::from(zones);
        *self.zones.write().unwrap_or_else(PoisonError::into_inner) = zones;

        info!(zones = count, "Zone catalog loaded");
        count
    }

    /// All zones in load order.
    pub fn list(&self) -> Arc<[Zone]> {
        Arc::clone(&self.zones.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// True if a zone named exactly `name` is loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.list().iter().any(|z| z.name() == name)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// An `OPENPVP` tag whose color segment is missing or empty.
fn is_truncated_openpvp(zone_type: &str) -> bool {
    let mut segments = zone_type.split('_');
    segments.next() == Some("OPENPVP") && segments.next().map_or(true, str::is_empty)
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::new(MarkerNames::default())
    }
}
