//! # Output Selector
//!
//! **Staged eligibility filtering followed by a weighted pick.**
//!
//! ## Stages
//!
//! Each stage narrows the survivors of the previous one. The first stage that
//! leaves nothing fails the call with that stage's message, so the player sees
//! the most specific reason rather than a generic "no output".
//!
//! ```text
//! Quality -> Fuel -> Season -> Weather -> Location -> weighted pick
//! ```
//!
//! ## Weighted Pick
//!
//! One draw `chance` in `[0, 1)`. Weighted configs (probability > 0) are walked
//! in order with a running total; the first one whose slice contains `chance`
//! wins. The mass left over (`1 - total`) is split evenly across unweighted
//! configs and the walk continues over them. If the draw still lands nowhere
//! the first survivor is returned.

use artisan_core::{Environment, Item, ItemId, RandomSource};

use crate::config::OutputConfig;
use crate::error::{ProductionError, ProductionResult, RestrictionStage};
use crate::messages::Translator;

/// Chooses one output config.
///
/// # Arguments
///
/// * `configs` - Candidate configs of the production rule
/// * `random` - Random source; exactly one value is drawn
/// * `fuel_check` - Returns true if `amount` of fuel `item_id` is available
/// * `environment` - Season, weather and location of the producer
/// * `input` - The input item, if any
/// * `messages` - Lookup for the restriction messages
///
/// # Errors
///
/// Returns `ProductionError::Restriction` naming the first stage that
/// eliminated every candidate.
pub fn choose_output<'a, R, F, T>(
    configs: &'a [OutputConfig],
    random: &mut R,
    mut fuel_check: F,
    environment: &Environment,
    input: Option<&Item>,
    messages: &T,
) -> ProductionResult<&'a OutputConfig>
where
    R: RandomSource + ?Sized,
    F: FnMut(ItemId, u32) -> bool,
    T: Translator + ?Sized,
{
    let input_quality = input.map(|i| i.quality);

    let candidates: Vec<&OutputConfig> = configs.iter().collect();
    let candidates = filter_stage(candidates, RestrictionStage::Quality, messages, |c| {
        c.accepts_quality(input_quality)
    })?;
    let candidates = filter_stage(candidates, RestrictionStage::Fuel, messages, |c| {
        c.accepts_fuel(&mut fuel_check)
    })?;
    let candidates = filter_stage(candidates, RestrictionStage::Season, messages, |c| {
        c.accepts_season(environment.season)
    })?;
    let candidates = filter_stage(candidates, RestrictionStage::Weather, messages, |c| {
        c.accepts_weather(environment.weather)
    })?;
    let candidates = filter_stage(candidates, RestrictionStage::Location, messages, |c| {
        c.accepts_location(&environment.location)
    })?;

    // Survivors are non-empty here, so index 0 always exists.
    let index = pick_weighted(&candidates, random).unwrap_or(0);
    let chosen = candidates[index];
    tracing::trace!(
        output = chosen.output_index,
        survivors = candidates.len(),
        "output config chosen"
    );
    Ok(chosen)
}

/// Applies one filter stage.
fn filter_stage<'a, T, P>(
    mut candidates: Vec<&'a OutputConfig>,
    stage: RestrictionStage,
    messages: &T,
    mut predicate: P,
) -> ProductionResult<Vec<&'a OutputConfig>>
where
    T: Translator + ?Sized,
    P: FnMut(&OutputConfig) -> bool,
{
    let before = candidates.len();
    candidates.retain(|c| predicate(c));
    if candidates.is_empty() {
        tracing::debug!(?stage, candidates = before, "every output config was filtered out");
        return Err(ProductionError::restriction(stage, messages));
    }
    Ok(candidates)
}

/// Draws once and returns the index of the picked config.
///
/// Returns `None` when the draw falls past all probability mass (including an
/// empty slice); callers fall back to the first candidate.
pub fn pick_weighted<R: RandomSource + ?Sized>(
    candidates: &[&OutputConfig],
    random: &mut R,
) -> Option<usize> {
    let chance = random.next_double();
    let mut cumulative = 0.0_f64;

    for (index, config) in candidates.iter().enumerate() {
        if !config.is_weighted() {
            continue;
        }
        cumulative += config.output_probability;
        if chance - cumulative < 0.0 {
            tracing::trace!(chance, cumulative, index, "weighted hit");
            return Some(index);
        }
    }

    let unweighted = candidates.iter().filter(|c| !c.is_weighted()).count();
    if unweighted == 0 {
        return None;
    }

    let increment = (1.0 - cumulative) / unweighted as f64;
    for (index, config) in candidates.iter().enumerate() {
        if config.is_weighted() {
            continue;
        }
        cumulative += increment;
        if chance - cumulative < 0.0 {
            tracing::trace!(chance, cumulative, index, "remainder hit");
            return Some(index);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::EnglishMessages;
    use artisan_core::{Location, Quality, Season, SequenceRandom, Weather};

    fn env() -> Environment {
        Environment::new(Season::Summer, Weather::Sunny, Location::new("Farm", true))
    }

    fn choose<'a>(
        configs: &'a [OutputConfig],
        draw: f64,
        input: Option<&Item>,
    ) -> ProductionResult<&'a OutputConfig> {
        let mut random = SequenceRandom::new([draw]);
        choose_output(
            configs,
            &mut random,
            |_, _| true,
            &env(),
            input,
            &EnglishMessages::new(),
        )
    }

    fn stage_of(result: ProductionResult<&OutputConfig>) -> Option<RestrictionStage> {
        result.err().and_then(|e| e.stage())
    }

    #[test]
    fn test_zero_draw_picks_first_weighted() {
        let configs = vec![
            OutputConfig::new(1),
            OutputConfig::new(2).with_probability(0.3),
            OutputConfig::new(3).with_probability(0.5),
        ];
        assert_eq!(choose(&configs, 0.0, None).unwrap().output_index, 2);
    }

    #[test]
    fn test_draw_inside_second_slice() {
        let configs = vec![
            OutputConfig::new(2).with_probability(0.3),
            OutputConfig::new(3).with_probability(0.5),
        ];
        assert_eq!(choose(&configs, 0.3, None).unwrap().output_index, 3);
        assert_eq!(choose(&configs, 0.79, None).unwrap().output_index, 3);
    }

    #[test]
    fn test_draw_just_below_one_picks_last_of_full_weights() {
        let configs = vec![
            OutputConfig::new(2).with_probability(0.3),
            OutputConfig::new(3).with_probability(0.7),
        ];
        assert_eq!(choose(&configs, 0.999_999, None).unwrap().output_index, 3);
    }

    #[test]
    fn test_remainder_split_across_unweighted() {
        let configs = vec![
            OutputConfig::new(1),
            OutputConfig::new(2).with_probability(0.5),
            OutputConfig::new(3),
        ];
        // Remainder 0.5 split into two slices of 0.25.
        assert_eq!(choose(&configs, 0.6, None).unwrap().output_index, 1);
        assert_eq!(choose(&configs, 0.8, None).unwrap().output_index, 3);
    }

    #[test]
    fn test_draw_past_weighted_mass_without_unweighted_falls_back_to_first() {
        let configs = vec![
            OutputConfig::new(7).with_probability(0.2),
            OutputConfig::new(8).with_probability(0.2),
        ];
        assert_eq!(choose(&configs, 0.9, None).unwrap().output_index, 7);
    }

    #[test]
    fn test_saturated_weights_never_fail() {
        let configs = vec![
            OutputConfig::new(1),
            OutputConfig::new(2).with_probability(0.7),
            OutputConfig::new(3).with_probability(0.6),
        ];
        for draw in [0.0, 0.5, 0.69, 0.7, 0.99, 0.999_999] {
            let chosen = choose(&configs, draw, None).unwrap();
            assert!(chosen.output_index == 2 || chosen.output_index == 3);
        }
    }

    #[test]
    fn test_all_unweighted_split_evenly() {
        let configs = vec![OutputConfig::new(1), OutputConfig::new(2), OutputConfig::new(3)];
        assert_eq!(choose(&configs, 0.1, None).unwrap().output_index, 1);
        assert_eq!(choose(&configs, 0.5, None).unwrap().output_index, 2);
        assert_eq!(choose(&configs, 0.9, None).unwrap().output_index, 3);
    }

    #[test]
    fn test_single_draw_per_selection() {
        let configs = vec![OutputConfig::new(1), OutputConfig::new(2).with_probability(0.1)];
        let mut random = SequenceRandom::new([0.5, 0.5]);
        let _ = choose_output(&configs, &mut random, |_, _| true, &env(), None, &EnglishMessages::new());
        assert_eq!(random.draws(), 1);
    }

    #[test]
    fn test_empty_config_list_is_a_quality_restriction() {
        assert_eq!(stage_of(choose(&[], 0.0, None)), Some(RestrictionStage::Quality));
    }

    #[test]
    fn test_quality_stage_attribution() {
        let configs = vec![OutputConfig::new(1).with_required_quality([Quality::Iridium])];
        let input = Item::new(400, "Strawberry", 120).with_quality(Quality::Gold);
        assert_eq!(
            stage_of(choose(&configs, 0.0, Some(&input))),
            Some(RestrictionStage::Quality)
        );
    }

    #[test]
    fn test_fuel_stage_attribution() {
        let configs = vec![OutputConfig::new(1).with_fuel(382, 1)];
        let mut random = SequenceRandom::new([0.0]);
        let result = choose_output(
            &configs,
            &mut random,
            |_, _| false,
            &env(),
            None,
            &EnglishMessages::new(),
        );
        assert_eq!(stage_of(result), Some(RestrictionStage::Fuel));
        assert_eq!(random.draws(), 0);
    }

    #[test]
    fn test_season_weather_location_attribution() {
        let season = vec![OutputConfig::new(1).with_required_season([Season::Winter])];
        assert_eq!(stage_of(choose(&season, 0.0, None)), Some(RestrictionStage::Season));

        let weather = vec![OutputConfig::new(1).with_required_weather([Weather::Rainy])];
        assert_eq!(stage_of(choose(&weather, 0.0, None)), Some(RestrictionStage::Weather));

        let location = vec![OutputConfig::new(1).with_required_location(["Greenhouse"])];
        assert_eq!(stage_of(choose(&location, 0.0, None)), Some(RestrictionStage::Location));

        let indoors = vec![OutputConfig::new(1).with_required_outdoors(false)];
        assert_eq!(stage_of(choose(&indoors, 0.0, None)), Some(RestrictionStage::Location));
    }

    #[test]
    fn test_first_emptying_stage_is_reported() {
        // Fails season and weather; season comes first.
        let configs = vec![OutputConfig::new(1)
            .with_required_season([Season::Winter])
            .with_required_weather([Weather::Snowy])];
        assert_eq!(stage_of(choose(&configs, 0.0, None)), Some(RestrictionStage::Season));
    }

    #[test]
    fn test_later_stage_sees_only_survivors() {
        // Config 1 passes quality but fails weather; config 2 survives everything.
        let configs = vec![
            OutputConfig::new(1)
                .with_probability(0.9)
                .with_required_weather([Weather::Rainy]),
            OutputConfig::new(2).with_fuel(382, 1),
            OutputConfig::new(3).with_required_season([Season::Fall]),
        ];
        let mut random = SequenceRandom::new([0.0]);
        let chosen = choose_output(
            &configs,
            &mut random,
            |id, _| id == 382,
            &env(),
            None,
            &EnglishMessages::new(),
        )
        .unwrap();
        assert_eq!(chosen.output_index, 2);
    }

    #[test]
    fn test_restriction_message_is_localized() {
        let configs = vec![OutputConfig::new(1).with_required_season([Season::Winter])];
        let messages = EnglishMessages::new().with_override("Message.Requirement.Season", "Not now.");
        let mut random = SequenceRandom::new([0.0]);
        let err = choose_output(&configs, &mut random, |_, _| true, &env(), None, &messages)
            .unwrap_err();
        assert_eq!(err.to_string(), "Not now.");
    }
}
