//! # Production Flow
//!
//! Runs one production attempt end to end: select, materialize, name, and
//! consume fuel. Fuel removal is all-or-nothing.

use artisan_core::{Environment, Farmer, Inventory, Item, ItemFactory, RandomSource};

use crate::config::OutputConfig;
use crate::error::{ProductionError, ProductionResult};
use crate::loader::ProducerRule;
use crate::materializer::create_output;
use crate::messages::Translator;
use crate::naming::{load_output_name, NameContext};
use crate::selector::choose_output;

/// Host services for production attempts.
#[derive(Clone, Copy)]
pub struct Producer<'a> {
    factory: &'a dyn ItemFactory,
    messages: &'a dyn Translator,
    names: NameContext<'a>,
}

impl<'a> Producer<'a> {
    /// Creates a producer over the host's item factory, messages and naming services.
    #[must_use]
    pub fn new(
        factory: &'a dyn ItemFactory,
        messages: &'a dyn Translator,
        names: NameContext<'a>,
    ) -> Self {
        Self {
            factory,
            messages,
            names,
        }
    }

    /// Produces one output for `input` under `rule`.
    ///
    /// Fuel is checked against `fuel` during selection and removed for the
    /// chosen config only after the output has been built.
    ///
    /// # Errors
    ///
    /// Returns `ProductionError::Restriction` when no config is eligible and
    /// `ProductionError::InsufficientFuel` if the chosen config's fuel can't be
    /// removed; the inventory is left untouched in both cases.
    pub fn produce<R: RandomSource + ?Sized>(
        &self,
        rule: &ProducerRule,
        random: &mut R,
        fuel: &mut Inventory,
        environment: &Environment,
        input: Option<&Item>,
        who: Option<&Farmer>,
    ) -> ProductionResult<Item> {
        let config = {
            let available: &Inventory = fuel;
            choose_output(
                &rule.outputs,
                random,
                |item_id, amount| available.has(item_id, amount),
                environment,
                input,
                self.messages,
            )?
        };

        let mut output = create_output(config, input, random, self.factory);
        load_output_name(config, &mut output, input, who, &self.names);

        consume_fuel(config, fuel)?;

        tracing::info!(
            producer = %rule.producer_name,
            output = output.id,
            stack = output.stack,
            price = output.price,
            "production finished"
        );
        Ok(output)
    }
}

impl std::fmt::Debug for Producer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Producer")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

/// Removes every fuel requirement of `config`, or nothing at all.
fn consume_fuel(config: &OutputConfig, fuel: &mut Inventory) -> ProductionResult<()> {
    let snapshot = fuel.snapshot();
    for requirement in &config.fuel {
        if fuel.remove(requirement.item_id, requirement.amount).is_err() {
            let available = fuel.count_item(requirement.item_id);
            fuel.restore(&snapshot);
            tracing::warn!(
                item_id = requirement.item_id,
                required = requirement.amount,
                available,
                "fuel consumption rolled back"
            );
            return Err(ProductionError::InsufficientFuel {
                item_id: requirement.item_id,
                required: requirement.amount,
                available,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RestrictionStage;
    use crate::messages::EnglishMessages;
    use artisan_core::{
        DefaultPreserveNames, ItemRegistry, Location, PreserveType, Season, SequenceRandom,
        Weather,
    };

    const COAL: u32 = 382;

    fn env() -> Environment {
        Environment::new(Season::Fall, Weather::Sunny, Location::new("Farm", true))
    }

    fn registry() -> ItemRegistry {
        let mut registry = ItemRegistry::new();
        registry.register(348, "Wine", 400);
        registry.register(334, "Copper Bar", 60);
        registry
    }

    fn rule(outputs: Vec<OutputConfig>) -> ProducerRule {
        ProducerRule {
            producer_name: "Keg".to_string(),
            input_identifier: "Blueberry".to_string(),
            outputs,
        }
    }

    #[test]
    fn test_produce_wine() {
        let registry = registry();
        let messages = EnglishMessages::new();
        let player = Farmer::new("Alex", "Sunny Acres");
        let producer = Producer::new(
            &registry,
            &messages,
            NameContext::new(&player, &DefaultPreserveNames),
        );
        let rule = rule(vec![OutputConfig::new(348)
            .with_preserve(PreserveType::Wine)
            .with_price(0, 3.0, true)
            .keeping_input_quality()]);
        let input = Item::new(258, "Blueberry", 50).with_quality(artisan_core::Quality::Silver);
        let mut fuel = Inventory::new();
        let mut random = SequenceRandom::new([0.0]);

        let output = producer
            .produce(&rule, &mut random, &mut fuel, &env(), Some(&input), None)
            .unwrap();

        assert_eq!(output.name(), "Blueberry Wine");
        assert_eq!(output.price, 150);
        assert_eq!(output.quality, artisan_core::Quality::Silver);
        assert_eq!(output.stack, 1);
        assert_eq!(output.preserved_parent_id, Some(258));
        assert_eq!(random.draws(), 3);
    }

    #[test]
    fn test_fuel_consumed_once_on_success() {
        let registry = registry();
        let messages = EnglishMessages::new();
        let player = Farmer::default();
        let producer = Producer::new(
            &registry,
            &messages,
            NameContext::new(&player, &DefaultPreserveNames),
        );
        let rule = rule(vec![OutputConfig::new(334).with_fuel(COAL, 1)]);
        let mut fuel = Inventory::new();
        fuel.add(COAL, 2).unwrap();
        let mut random = SequenceRandom::new([0.0]);

        producer
            .produce(&rule, &mut random, &mut fuel, &env(), None, None)
            .unwrap();
        assert_eq!(fuel.count_item(COAL), 1);

        producer
            .produce(&rule, &mut random, &mut fuel, &env(), None, None)
            .unwrap();
        assert_eq!(fuel.count_item(COAL), 0);

        let err = producer
            .produce(&rule, &mut random, &mut fuel, &env(), None, None)
            .unwrap_err();
        assert_eq!(err.stage(), Some(RestrictionStage::Fuel));
    }

    #[test]
    fn test_consume_fuel_rolls_back() {
        let config = OutputConfig::new(334).with_fuel(COAL, 1).with_fuel(388, 10);
        let mut fuel = Inventory::new();
        fuel.add(COAL, 1).unwrap();
        fuel.add(388, 4).unwrap();

        let err = consume_fuel(&config, &mut fuel).unwrap_err();

        assert_eq!(
            err,
            ProductionError::InsufficientFuel {
                item_id: 388,
                required: 10,
                available: 4,
            }
        );
        assert_eq!(fuel.count_item(COAL), 1);
        assert_eq!(fuel.count_item(388), 4);
    }
}
