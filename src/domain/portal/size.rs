//! Portal size (player capacity).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Capacities a Roads of Avalon portal can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PortalSize {
    Two,
    Seven,
    Twenty,
}

impl PortalSize {
    /// Raw values accepted as a portal size.
    pub const ALLOWED: &'static [i32] = &[2, 7, 20];

    pub fn players(&self) -> i32 {
        match self {
            PortalSize::Two => 2,
            PortalSize::Seven => 7,
            PortalSize::Twenty => 20,
        }
    }
}

impl TryFrom<i32> for PortalSize {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(PortalSize::Two),
            7 => Ok(PortalSize::Seven),
            20 => Ok(PortalSize::Twenty),
            other => Err(ValidationError::not_allowed("size", Self::ALLOWED, other)),
        }
    }
}

impl From<PortalSize> for i32 {
    fn from(size: PortalSize) -> Self {
        size.players()
    }
}
