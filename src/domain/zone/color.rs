//! Zone color derived from a raw zone type tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colors the map client knows how to draw.
pub const KNOWN_COLORS: [&str; 5] = ["black", "red", "yellow", "blue", "road"];

/// Display color of a zone.
///
/// Always a pure function of the zone's type tag:
///
/// | type tag            | color              |
/// |---------------------|--------------------|
/// | `SAFEAREA`          | `blue`             |
/// | `TUNNEL_*`          | `road`             |
/// | `OPENPVP_<X>_*`     | lowercase `<X>`    |
/// | anything else       | `""` (unmapped)    |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneColor(String);

impl ZoneColor {
    /// Derives the color for a zone type tag.
    ///
    /// Never fails: an `OPENPVP` tag without a second segment is unmapped.
    pub fn from_zone_type(zone_type: &str) -> Self {
        if zone_type == "SAFEAREA" {
            return Self::blue();
        }

        let mut segments = zone_type.split('_');
        match segments.next() {
            Some("TUNNEL") => Self::road(),
            Some("OPENPVP") => match segments.next() {
                Some(tier) => Self(tier.to_lowercase()),
                None => Self::unmapped(),
            },
            _ => Self::unmapped(),
        }
    }

    pub fn blue() -> Self {
        Self("blue".to_string())
    }

    pub fn road() -> Self {
        Self("road".to_string())
    }

    /// The empty color, used when a type tag has no mapping.
    pub fn unmapped() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unmapped(&self) -> bool {
        self.0.is_empty()
    }

    /// True for colors the map client can render.
    pub fn is_known(&self) -> bool {
        KNOWN_COLORS.contains(&self.0.as_str())
    }
}

impl fmt::Display for ZoneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn safearea_is_blue() {
        assert_eq!(ZoneColor::from_zone_type("SAFEAREA"), ZoneColor::blue());
    }

    #[test]
    fn safearea_must_match_exactly() {
        assert!(ZoneColor::from_zone_type("SAFEAREA_CITY").is_unmapped());
        assert!(ZoneColor::from_zone_type("safearea").is_unmapped());
    }

    #[test]
    fn tunnel_is_road() {
        assert_eq!(ZoneColor::from_zone_type("TUNNEL_BLACK_LOW"), ZoneColor::road());
        assert_eq!(ZoneColor::from_zone_type("TUNNEL"), ZoneColor::road());
    }

    #[test]
    fn openpvp_uses_second_segment() {
        assert_eq!(ZoneColor::from_zone_type("OPENPVP_BLACK_1").as_str(), "black");
        assert_eq!(ZoneColor::from_zone_type("OPENPVP_RED").as_str(), "red");
        assert_eq!(ZoneColor::from_zone_type("OPENPVP_YELLOW_3").as_str(), "yellow");
    }

    #[test]
    fn openpvp_without_second_segment_is_unmapped() {
        assert!(ZoneColor::from_zone_type("OPENPVP").is_unmapped());
        assert!(ZoneColor::from_zone_type("OPENPVP_").is_unmapped());
    }

    #[test]
    fn unknown_patterns_are_unmapped() {
        assert!(ZoneColor::from_zone_type("PLAYERCITY_BLACK").is_unmapped());
        assert!(ZoneColor::from_zone_type("").is_unmapped());
    }

    #[test]
    fn known_colors_are_recognized() {
        assert!(ZoneColor::from_zone_type("OPENPVP_BLACK").is_known());
        assert!(ZoneColor::road().is_known());
        assert!(!ZoneColor::from_zone_type("OPENPVP_PURPLE").is_known());
        assert!(!ZoneColor::unmapped().is_known());
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&ZoneColor::blue()).unwrap(), "\"blue\"");
        assert_eq!(serde_json::to_string(&ZoneColor::unmapped()).unwrap(), "\"\"");
    }

    proptest! {
        #[test]
        fn openpvp_color_is_lowercased_second_segment(
            second in "[A-Za-z]{1,10}",
            rest in "(_[A-Z0-9]{1,5}){0,3}",
        ) {
            let tag = format!("OPENPVP_{}{}", second, rest);
            let color = ZoneColor::from_zone_type(&tag);
            prop_assert_eq!(color.as_str(), second.to_lowercase());
        }

        #[test]
        fn tunnel_tags_are_always_road(rest in "(_[A-Z0-9]{0,6}){0,3}") {
            let tag = format!("TUNNEL{}", rest);
            prop_assert_eq!(ZoneColor::from_zone_type(&tag), ZoneColor::road());
        }

        #[test]
        fn derivation_never_panics(tag in "\\PC{0,24}") {
            let _ = ZoneColor::from_zone_type(&tag);
        }
    }
}
