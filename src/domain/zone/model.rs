//! Zone value object.

use serde::Serialize;

use super::color::ZoneColor;
use super::marker_names::MarkerNames;
use super::snapshot::RawZone;

/// A resource node found in a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub name: String,
    pub tier: String,
}

/// A named map region with its derived attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    name: String,
    color: ZoneColor,
    #[serde(rename = "type")]
    zone_type: String,
    markers: Vec<String>,
    resources: Vec<Resource>,
}

impl Zone {
    /// Normalizes a raw snapshot descriptor.
    ///
    /// Marker order and duplicates are kept as-is; resources keep only name and tier.
    pub fn from_raw(raw: RawZone, marker_names: &MarkerNames) -> Self {
        let color = ZoneColor::from_zone_type(&raw.zone_type);

        let markers = raw
            .markers
            .unwrap_or_default()
            .iter()
            .map(|m| marker_names.display_name(&m.marker_type).to_string())
            .collect();

        let resources = raw
            .resources
            .unwrap_or_default()
            .into_iter()
            .map(|r| Resource {
                name: r.name,
                tier: r.tier,
            })
            .collect();

        Self {
            name: raw.name,
            color,
            zone_type: raw.zone_type,
            markers,
            resources,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &ZoneColor {
        &self.color
    }

    pub fn zone_type(&self) -> &str {
        &self.zone_type
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}
