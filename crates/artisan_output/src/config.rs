//! # Output Configs
//!
//! One [`OutputConfig`] describes a possible outcome of a production rule:
//! which item comes out, when it is eligible, how likely it is, and how its
//! price, quality, stack and name are derived.
//!
//! Every eligibility field treats "empty" and "unset" as "no constraint".

use serde::{Deserialize, Serialize};

use artisan_core::item::is_light_source_id;
use artisan_core::{ItemId, Location, PreserveType, Quality, Season, Weather};

/// A (base stack, max stack) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Smallest stack produced.
    pub output_stack: i32,
    /// Largest stack produced. Values below `output_stack` pin the stack to it.
    pub output_max_stack: i32,
}

impl StackConfig {
    /// Creates a new stack config.
    #[inline]
    #[must_use]
    pub const fn new(output_stack: i32, output_max_stack: i32) -> Self {
        Self {
            output_stack,
            output_max_stack,
        }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Bonus stack range used for a given input quality tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityStackConfig {
    /// Chance in `[0, 1]` of using this range instead of the base one.
    pub probability: f64,
    /// Smallest stack produced.
    pub output_stack: i32,
    /// Largest stack produced.
    pub output_max_stack: i32,
}

impl QualityStackConfig {
    /// Creates a new tier override.
    #[inline]
    #[must_use]
    pub const fn new(probability: f64, output_stack: i32, output_max_stack: i32) -> Self {
        Self {
            probability,
            output_stack,
            output_max_stack,
        }
    }

    /// Returns the stack range of this override.
    #[inline]
    #[must_use]
    pub const fn stack_config(&self) -> StackConfig {
        StackConfig::new(self.output_stack, self.output_max_stack)
    }
}

/// Fuel consumed by an output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelRequirement {
    /// Fuel item id.
    pub item_id: ItemId,
    /// Amount required.
    pub amount: u32,
}

impl FuelRequirement {
    /// Creates a new fuel requirement.
    #[inline]
    #[must_use]
    pub const fn new(item_id: ItemId, amount: u32) -> Self {
        Self { item_id, amount }
    }
}

const fn default_stack() -> i32 {
    1
}

const fn default_multiplier() -> f64 {
    1.0
}

/// A candidate outcome of a production rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Item id of the output.
    pub output_index: ItemId,

    /// Input quality tiers accepted. Empty accepts all.
    #[serde(default)]
    pub required_input_quality: Vec<Quality>,
    /// Fuel that must be available. All must be satisfied.
    #[serde(default)]
    pub fuel: Vec<FuelRequirement>,
    /// Seasons accepted. Empty accepts all.
    #[serde(default)]
    pub required_season: Vec<Season>,
    /// Weather accepted. Empty accepts all.
    #[serde(default)]
    pub required_weather: Vec<Weather>,
    /// Location names accepted. Empty accepts all.
    #[serde(default)]
    pub required_location: Vec<String>,
    /// Required outdoors state. `None` accepts both.
    #[serde(default)]
    pub required_outdoors: Option<bool>,

    /// Selection weight. Zero or less shares the leftover probability.
    #[serde(default)]
    pub output_probability: f64,

    /// Base stack.
    #[serde(default = "default_stack")]
    pub output_stack: i32,
    /// Base max stack.
    #[serde(default = "default_stack")]
    pub output_max_stack: i32,
    /// Flat amount added to the price.
    #[serde(default)]
    pub output_price_increment: i32,
    /// Multiplier applied to the base price.
    #[serde(default = "default_multiplier")]
    pub output_price_multiplier: f64,
    /// Price from the input's price instead of the output's own.
    #[serde(default)]
    pub input_price_based: bool,
    /// Quality of the output.
    #[serde(default)]
    pub output_quality: Quality,
    /// Copy the input's quality instead of `output_quality`.
    #[serde(default)]
    pub keep_input_quality: bool,
    /// Preserve tag for flavored goods.
    #[serde(default)]
    pub preserve_type: Option<PreserveType>,
    /// Name template with `{inputName}`, `{outputName}`, `{farmerName}` and `{farmName}`.
    #[serde(default)]
    pub output_name: Option<String>,

    /// Bonus stack for silver inputs.
    #[serde(default)]
    pub silver_quality_input: QualityStackConfig,
    /// Bonus stack for gold inputs.
    #[serde(default)]
    pub gold_quality_input: QualityStackConfig,
    /// Bonus stack for iridium inputs.
    #[serde(default)]
    pub iridium_quality_input: QualityStackConfig,
}

impl OutputConfig {
    /// Creates an unrestricted, unweighted config for `output_index`.
    #[must_use]
    pub fn new(output_index: ItemId) -> Self {
        Self {
            output_index,
            required_input_quality: Vec::new(),
            fuel: Vec::new(),
            required_season: Vec::new(),
            required_weather: Vec::new(),
            required_location: Vec::new(),
            required_outdoors: None,
            output_probability: 0.0,
            output_stack: default_stack(),
            output_max_stack: default_stack(),
            output_price_increment: 0,
            output_price_multiplier: default_multiplier(),
            input_price_based: false,
            output_quality: Quality::Normal,
            keep_input_quality: false,
            preserve_type: None,
            output_name: None,
            silver_quality_input: QualityStackConfig::default(),
            gold_quality_input: QualityStackConfig::default(),
            iridium_quality_input: QualityStackConfig::default(),
        }
    }

    /// Sets the selection weight.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.output_probability = probability;
        self
    }

    /// Sets the accepted input qualities.
    #[must_use]
    pub fn with_required_quality(mut self, qualities: impl Into<Vec<Quality>>) -> Self {
        self.required_input_quality = qualities.into();
        self
    }

    /// Adds a fuel requirement.
    #[must_use]
    pub fn with_fuel(mut self, item_id: ItemId, amount: u32) -> Self {
        self.fuel.push(FuelRequirement::new(item_id, amount));
        self
    }

    /// Sets the accepted seasons.
    #[must_use]
    pub fn with_required_season(mut self, seasons: impl Into<Vec<Season>>) -> Self {
        self.required_season = seasons.into();
        self
    }

    /// Sets the accepted weather.
    #[must_use]
    pub fn with_required_weather(mut self, weather: impl Into<Vec<Weather>>) -> Self {
        self.required_weather = weather.into();
        self
    }

    /// Sets the accepted location names.
    #[must_use]
    pub fn with_required_location<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.required_location = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the required outdoors state.
    #[must_use]
    pub fn with_required_outdoors(mut self, outdoors: bool) -> Self {
        self.required_outdoors = Some(outdoors);
        self
    }

    /// Sets the base stack range.
    #[must_use]
    pub fn with_stack(mut self, output_stack: i32, output_max_stack: i32) -> Self {
        self.output_stack = output_stack;
        self.output_max_stack = output_max_stack;
        self
    }

    /// Sets the price increment and multiplier.
    #[must_use]
    pub fn with_price(mut self, increment: i32, multiplier: f64, input_price_based: bool) -> Self {
        self.output_price_increment = increment;
        self.output_price_multiplier = multiplier;
        self.input_price_based = input_price_based;
        self
    }

    /// Sets the output quality.
    #[must_use]
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.output_quality = quality;
        self
    }

    /// Copies the input's quality onto the output.
    #[must_use]
    pub fn keeping_input_quality(mut self) -> Self {
        self.keep_input_quality = true;
        self
    }

    /// Sets the preserve tag.
    #[must_use]
    pub fn with_preserve(mut self, preserve: PreserveType) -> Self {
        self.preserve_type = Some(preserve);
        self
    }

    /// Sets the name template.
    #[must_use]
    pub fn with_name(mut self, template: impl Into<String>) -> Self {
        self.output_name = Some(template.into());
        self
    }

    /// Sets the tier override for `quality`. Normal quality has no override.
    #[must_use]
    pub fn with_quality_stack(mut self, quality: Quality, stack: QualityStackConfig) -> Self {
        match quality {
            Quality::Silver => self.silver_quality_input = stack,
            Quality::Gold => self.gold_quality_input = stack,
            Quality::Iridium => self.iridium_quality_input = stack,
            Quality::Normal => {}
        }
        self
    }

    /// Returns the base stack range.
    #[inline]
    #[must_use]
    pub const fn base_stack(&self) -> StackConfig {
        StackConfig::new(self.output_stack, self.output_max_stack)
    }

    /// Returns true if the output belongs to the light-source family.
    #[inline]
    #[must_use]
    pub fn is_light_source(&self) -> bool {
        is_light_source_id(self.output_index)
    }

    /// Returns true if this config takes a share of the selection probability.
    #[inline]
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.output_probability > 0.0
    }

    /// Quality criterion. Without an input only unrestricted configs pass.
    #[must_use]
    pub fn accepts_quality(&self, input_quality: Option<Quality>) -> bool {
        self.required_input_quality.is_empty()
            || input_quality.is_some_and(|q| self.required_input_quality.contains(&q))
    }

    /// Fuel criterion. No requirements always passes.
    pub fn accepts_fuel<F: FnMut(ItemId, u32) -> bool>(&self, mut fuel_check: F) -> bool {
        self.fuel.iter().all(|f| fuel_check(f.item_id, f.amount))
    }

    /// Season criterion.
    #[must_use]
    pub fn accepts_season(&self, season: Season) -> bool {
        self.required_season.is_empty() || self.required_season.contains(&season)
    }

    /// Weather criterion.
    #[must_use]
    pub fn accepts_weather(&self, weather: Weather) -> bool {
        self.required_weather.is_empty() || self.required_weather.contains(&weather)
    }

    /// Location criterion: the name and the outdoors state must both match.
    #[must_use]
    pub fn accepts_location(&self, location: &Location) -> bool {
        let name_ok = self.required_location.is_empty()
            || self.required_location.iter().any(|n| *n == location.name);
        let outdoors_ok = self
            .required_outdoors
            .map_or(true, |outdoors| outdoors == location.is_outdoors);
        name_ok && outdoors_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_requirements_accept_everything() {
        let config = OutputConfig::new(348);
        assert!(config.accepts_quality(None));
        assert!(config.accepts_quality(Some(Quality::Iridium)));
        assert!(config.accepts_fuel(|_, _| false));
        assert!(config.accepts_season(Season::Winter));
        assert!(config.accepts_weather(Weather::Stormy));
        assert!(config.accepts_location(&Location::new("Cellar", false)));
    }

    #[test]
    fn test_quality_requirement_without_input() {
        let config = OutputConfig::new(348).with_required_quality([Quality::Gold]);
        assert!(!config.accepts_quality(None));
        assert!(config.accepts_quality(Some(Quality::Gold)));
        assert!(!config.accepts_quality(Some(Quality::Silver)));
    }

    #[test]
    fn test_fuel_requirements_all_checked() {
        let config = OutputConfig::new(348).with_fuel(382, 1).with_fuel(388, 5);
        assert!(config.accepts_fuel(|_, _| true));
        assert!(!config.accepts_fuel(|id, _| id == 382));
    }

    #[test]
    fn test_location_needs_name_and_outdoors() {
        let config = OutputConfig::new(348)
            .with_required_location(["Farm"])
            .with_required_outdoors(true);
        assert!(config.accepts_location(&Location::new("Farm", true)));
        assert!(!config.accepts_location(&Location::new("Farm", false)));
        assert!(!config.accepts_location(&Location::new("Town", true)));
    }

    #[test]
    fn test_light_source_ids() {
        assert!(OutputConfig::new(93).is_light_source());
        assert!(OutputConfig::new(94).is_light_source());
        assert!(!OutputConfig::new(348).is_light_source());
    }

    #[test]
    fn test_weighted_boundary() {
        assert!(OutputConfig::new(1).with_probability(0.1).is_weighted());
        assert!(!OutputConfig::new(1).with_probability(0.0).is_weighted());
        assert!(!OutputConfig::new(1).with_probability(-1.0).is_weighted());
    }
}
