//! # World Snapshot
//!
//! Seasons, weather, the producer's location and the acting farmer.
//!
//! The host queries these once per production attempt and hands the snapshot
//! to the engine. The engine never asks the game for them directly.

use serde::{Deserialize, Serialize};

/// Calendar season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Spring.
    Spring,
    /// Summer.
    Summer,
    /// Fall.
    Fall,
    /// Winter.
    Winter,
}

/// Weather of the current day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    /// Clear skies.
    Sunny,
    /// Rain.
    Rainy,
    /// Rain with lightning.
    Stormy,
    /// Snow.
    Snowy,
    /// Debris weather.
    Windy,
}

/// The location a producer is placed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location name as known to the host (e.g. `Farm`, `Greenhouse`).
    pub name: String,
    /// Whether the location is outdoors.
    pub is_outdoors: bool,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(name: impl Into<String>, is_outdoors: bool) -> Self {
        Self {
            name: name.into(),
            is_outdoors,
        }
    }
}

/// Environmental context for one production attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    /// Current season.
    pub season: Season,
    /// Current weather.
    pub weather: Weather,
    /// Location of the producer.
    pub location: Location,
}

impl Environment {
    /// Creates a new environment snapshot.
    #[must_use]
    pub fn new(season: Season, weather: Weather, location: Location) -> Self {
        Self {
            season,
            weather,
            location,
        }
    }
}

/// The farmer operating a producer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farmer {
    /// Farmer name.
    pub name: String,
    /// Name of the farmer's farm.
    pub farm_name: String,
}

impl Farmer {
    /// Creates a new farmer.
    #[must_use]
    pub fn new(name: impl Into<String>, farm_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            farm_name: farm_name.into(),
        }
    }
}
