//! Rename table for raw map marker tags.

use std::collections::HashMap;

/// Maps raw marker tags from the snapshot to display names.
///
/// Tags with no entry pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerNames {
    names: HashMap<String, String>,
}

impl MarkerNames {
    /// An empty table; every tag passes through.
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    /// Returns a copy with `overrides` layered on top of this table.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.names
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Display name for a raw marker tag.
    pub fn display_name<'a>(&'a self, raw: &'a str) -> &'a str {
        self.names.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The Roads of Avalon content markers.
impl Default for MarkerNames {
    fn default() -> Self {
        Self::empty().with_overrides([
            ("roads_of_avalon_solo_pve", "Solo PvE content"),
            ("roads_of_avalon_group_pve", "Group PvE content"),
            ("roads_of_avalon_raid_pve", "Raid PvE content"),
        ])
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MarkerNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::empty().with_overrides(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_renames_avalon_markers() {
        let names = MarkerNames::default();
        assert_eq!(names.len(), 3);
        assert_eq!(names.display_name("roads_of_avalon_solo_pve"), "Solo PvE content");
        assert_eq!(names.display_name("roads_of_avalon_group_pve"), "Group PvE content");
        assert_eq!(names.display_name("roads_of_avalon_raid_pve"), "Raid PvE content");
    }

    #[test]
    fn unmapped_tags_pass_through() {
        let names = MarkerNames::default();
        assert_eq!(names.display_name("dungeon_elite"), "dungeon_elite");
        assert_eq!(names.display_name(""), "");
    }

    #[test]
    fn overrides_replace_defaults() {
        let names = MarkerNames::default()
            .with_overrides([("roads_of_avalon_solo_pve", "Solo")]);
        assert_eq!(names.display_name("roads_of_avalon_solo_pve"), "Solo");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn synthetic_table_from_iterator() {
        let names: MarkerNames = [("a", "Alpha")].into_iter().collect();
        assert_eq!(names.display_name("a"), "Alpha");
        assert_eq!(names.display_name("roads_of_avalon_solo_pve"), "roads_of_avalon_solo_pve");
    }
}
