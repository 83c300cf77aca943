//! # Content Packs
//!
//! Producer rules loaded from TOML.
//!
//! ```toml
//! [[rules]]
//! producer_name = "Keg"
//! input_identifier = "Blueberry"
//!
//! [[rules.outputs]]
//! output_index = 348
//! preserve_type = "Wine"
//! input_price_based = true
//! output_price_multiplier = 3.0
//!
//! [[rules.outputs]]
//! output_index = 348
//! output_probability = 0.1
//! output_quality = 2
//! required_season = ["fall"]
//! ```
//!
//! Packs are validated once on load; the engine assumes valid configs after
//! that.

use serde::{Deserialize, Serialize};
use std::path::Path;

use artisan_core::Item;

use crate::config::{OutputConfig, QualityStackConfig};
use crate::error::{ProductionError, ProductionResult};

/// One production rule: what a producer makes from an input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProducerRule {
    /// Name of the producer machine.
    pub producer_name: String,
    /// Input item name or numeric id.
    pub input_identifier: String,
    /// Candidate outputs.
    pub outputs: Vec<OutputConfig>,
}

impl ProducerRule {
    /// Returns true if this rule takes `input`.
    #[must_use]
    pub fn matches_input(&self, input: &Item) -> bool {
        self.input_identifier == input.name() || self.input_identifier == input.id.to_string()
    }

    fn validate(&self) -> ProductionResult<()> {
        if self.outputs.is_empty() {
            return Err(ProductionError::InvalidConfig(format!(
                "rule {}/{} has no outputs",
                self.producer_name, self.input_identifier
            )));
        }
        for output in &self.outputs {
            let label = format!(
                "rule {}/{} output {}",
                self.producer_name, self.input_identifier, output.output_index
            );
            if !output.output_probability.is_finite() {
                return Err(ProductionError::InvalidConfig(format!(
                    "{label}: output_probability must be finite"
                )));
            }
            if !output.output_price_multiplier.is_finite() {
                return Err(ProductionError::InvalidConfig(format!(
                    "{label}: output_price_multiplier must be finite"
                )));
            }
            for (i, requirement) in output.fuel.iter().enumerate() {
                if output.fuel[..i]
                    .iter()
                    .any(|earlier| earlier.item_id == requirement.item_id)
                {
                    return Err(ProductionError::InvalidConfig(format!(
                        "{label}: fuel item {} listed more than once",
                        requirement.item_id
                    )));
                }
            }
            for (tier, stack) in [
                ("silver", &output.silver_quality_input),
                ("gold", &output.gold_quality_input),
                ("iridium", &output.iridium_quality_input),
            ] {
                validate_tier(&label, tier, stack)?;
            }
        }
        Ok(())
    }
}

fn validate_tier(label: &str, tier: &str, stack: &QualityStackConfig) -> ProductionResult<()> {
    if (0.0..=1.0).contains(&stack.probability) {
        Ok(())
    } else {
        Err(ProductionError::InvalidConfig(format!(
            "{label}: {tier} probability {} outside [0, 1]",
            stack.probability
        )))
    }
}

/// A set of producer rules.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPack {
    /// All rules in the pack.
    #[serde(default)]
    pub rules: Vec<ProducerRule>,
}

impl ContentPack {
    /// Parses and validates a pack from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ProductionError::Toml` on malformed TOML and
    /// `ProductionError::InvalidConfig` on failed validation.
    pub fn from_toml_str(text: &str) -> ProductionResult<Self> {
        let pack: Self = toml::from_str(text)?;
        for rule in &pack.rules {
            rule.validate()?;
        }
        Ok(pack)
    }

    /// Reads, parses and validates a pack file.
    ///
    /// # Errors
    ///
    /// Returns `ProductionError::Io` if the file can't be read, otherwise as
    /// [`ContentPack::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> ProductionResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ProductionError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Finds the rule of `producer_name` for `input`.
    #[must_use]
    pub fn rule_for(&self, producer_name: &str, input: &Item) -> Option<&ProducerRule> {
        self.rules
            .iter()
            .find(|r| r.producer_name == producer_name && r.matches_input(input))
    }
}
