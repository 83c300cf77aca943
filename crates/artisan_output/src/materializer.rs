//! # Output Materializer
//!
//! Turns a chosen [`OutputConfig`] into a concrete [`Item`].
//!
//! The name is left at the item's default here; call
//! [`load_output_name`](crate::naming::load_output_name) afterwards.

use artisan_core::{Item, ItemFactory, Quality, RandomSource};

use crate::config::{OutputConfig, StackConfig};

/// Creates the output item for `config`.
///
/// Draws twice from `random`, both inside [`get_output_stack`].
pub fn create_output<R, F>(
    config: &OutputConfig,
    input: Option<&Item>,
    random: &mut R,
    factory: &F,
) -> Item
where
    R: RandomSource + ?Sized,
    F: ItemFactory + ?Sized,
{
    let mut output = if config.is_light_source() {
        factory.create_light_source(config.output_index, config.output_stack)
    } else {
        factory.create(config.output_index)
    };

    let base_price = if config.input_price_based {
        input.map_or(0, |i| i.price)
    } else {
        output.price
    };
    output.price = derive_price(config, base_price);

    output.quality = if config.keep_input_quality {
        input.map_or(Quality::Normal, |i| i.quality)
    } else {
        config.output_quality
    };

    output.stack = get_output_stack(config, input, random);

    output
}

/// `increment + base_price * multiplier`, truncated toward zero.
#[allow(clippy::cast_possible_truncation)]
fn derive_price(config: &OutputConfig, base_price: i32) -> i32 {
    (f64::from(config.output_price_increment)
        + f64::from(base_price) * config.output_price_multiplier) as i32
}

/// Picks the stack range for the input's quality tier.
///
/// A single `chance` is compared against the iridium, gold and silver
/// overrides in that order; only the tier matching the input can apply.
fn select_stack_config(config: &OutputConfig, input_quality: Option<Quality>, chance: f64) -> StackConfig {
    match input_quality {
        Some(Quality::Iridium) if chance < config.iridium_quality_input.probability => {
            config.iridium_quality_input.stack_config()
        }
        Some(Quality::Gold) if chance < config.gold_quality_input.probability => {
            config.gold_quality_input.stack_config()
        }
        Some(Quality::Silver) if chance < config.silver_quality_input.probability => {
            config.silver_quality_input.stack_config()
        }
        _ => config.base_stack(),
    }
}

/// Computes the output stack.
///
/// The result lies in `[stack, max(stack, max_stack)]` of the selected range.
pub fn get_output_stack<R: RandomSource + ?Sized>(
    config: &OutputConfig,
    input: Option<&Item>,
    random: &mut R,
) -> i32 {
    let chance = random.next_double();
    let stack = select_stack_config(config, input.map(|i| i.quality), chance);
    let upper = stack
        .output_stack
        .max(stack.output_max_stack.saturating_add(1));
    random.next_int(stack.output_stack, upper)
}
