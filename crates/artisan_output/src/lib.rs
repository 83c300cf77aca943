//! # Artisan Output Engine
//!
//! Decides what a producer makes from an input and builds the resulting item.
//!
//! ## Pipeline
//!
//! 1. **Selector** - [`choose_output`] filters the candidate configs by input
//!    quality, fuel, season, weather and location, in that order, then makes a
//!    weighted pick. The first stage that eliminates every candidate names the
//!    restriction in the returned error.
//! 2. **Materializer** - [`create_output`] builds the item and derives price,
//!    quality and stack (with quality-tier bonus stacks).
//! 3. **Name Loader** - [`load_output_name`] applies preserve names or name
//!    templates and stamps provenance.
//!
//! [`Producer::produce`] runs all three and consumes the chosen config's fuel.
//!
//! ## Randomness
//!
//! Filters draw nothing. Selection draws once. Stack derivation draws twice
//! (tier chance, then the stack range). Pass the same [`RandomSource`] through
//! every call to keep the sequence reproducible.
//!
//! ## Example
//!
//! ```rust,ignore
//! use artisan_output::{ContentPack, EnglishMessages, NameContext, Producer};
//!
//! let pack = ContentPack::from_path("data/packs/keg.toml")?;
//! let rule = pack.rule_for("Keg", &input).expect("keg accepts blueberries");
//!
//! let producer = Producer::new(&registry, &EnglishMessages::new(), names);
//! let output = producer.produce(rule, &mut rng, &mut fuel, &env, Some(&input), None)?;
//! ```
//!
//! [`RandomSource`]: artisan_core::RandomSource

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod loader;
pub mod materializer;
pub mod messages;
pub mod naming;
pub mod producer;
pub mod selector;

pub use config::{FuelRequirement, OutputConfig, QualityStackConfig, StackConfig};
pub use error::{ProductionError, ProductionResult, RestrictionStage};
pub use loader::{ContentPack, ProducerRule};
pub use materializer::{create_output, get_output_stack};
pub use messages::{EnglishMessages, Translator};
pub use naming::{load_output_name, NameContext};
pub use producer::Producer;
pub use selector::{choose_output, pick_weighted};
