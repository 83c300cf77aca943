//! # Preserve Naming
//!
//! Flavored goods take their name from the input they were made from.

use serde::{Deserialize, Serialize};

/// Tag marking an output as a processed variant of its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreserveType {
    /// Fruit wine.
    Wine,
    /// Fruit jelly.
    Jelly,
    /// Pickled vegetable.
    Pickle,
    /// Vegetable juice.
    Juice,
    /// Fish roe.
    Roe,
    /// Aged roe.
    AgedRoe,
    /// Flower honey.
    Honey,
}

/// Lookup from (preserve type, input name) to the output name.
pub trait PreserveNamer {
    /// Returns the name of a preserved good made from `input_name`.
    fn preserve_name(&self, preserve: PreserveType, input_name: &str) -> String;
}

/// English naming table.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPreserveNames;

impl PreserveNamer for DefaultPreserveNames {
    fn preserve_name(&self, preserve: PreserveType, input_name: &str) -> String {
        let name = match preserve {
            PreserveType::Wine => format!("{input_name} Wine"),
            PreserveType::Jelly => format!("{input_name} Jelly"),
            PreserveType::Pickle => format!("Pickled {input_name}"),
            PreserveType::Juice => format!("{input_name} Juice"),
            PreserveType::Roe => format!("{input_name} Roe"),
            PreserveType::AgedRoe => format!("Aged {input_name}"),
            PreserveType::Honey if input_name.is_empty() => "Wild Honey".to_string(),
            PreserveType::Honey => format!("{input_name} Honey"),
        };
        name.trim().to_string()
    }
}
