//! # Quality Tiers
//!
//! Item quality as stored by the host. Tier 3 does not exist; iridium is 4.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Quality tier of an item.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Quality {
    /// Base quality.
    #[default]
    Normal = 0,
    /// Silver star.
    Silver = 1,
    /// Gold star.
    Gold = 2,
    /// Iridium star.
    Iridium = 4,
}

impl Quality {
    /// Returns the numeric tier as stored by the host.
    #[inline]
    #[must_use]
    pub const fn tier(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Quality {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Silver),
            2 => Ok(Self::Gold),
            4 => Ok(Self::Iridium),
            other => Err(CoreError::InvalidQuality(other)),
        }
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.tier()
    }
}
