//! # Artisan Core
//!
//! Host-side model consumed by the Artisan output engine.
//!
//! ## Contents
//!
//! 1. **Items** - [`Item`] with a lazily cached display name, built through an [`ItemFactory`]
//! 2. **World snapshot** - [`Environment`] (season, weather, location) taken once per call
//! 3. **Preserve naming** - [`PreserveType`] and the [`PreserveNamer`] lookup table
//! 4. **Randomness** - [`RandomSource`], implemented for every `rand::Rng`
//! 5. **Fuel** - slot-based [`Inventory`] used for fuel checks and consumption
//!
//! Nothing in here keeps global state. The current player, the random source and
//! the environment are all passed in by the caller.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod inventory;
pub mod item;
pub mod preserve;
pub mod quality;
pub mod random;
pub mod world;

pub use error::{CoreError, CoreResult};
pub use inventory::{Inventory, InventorySnapshot};
pub use item::{Item, ItemDefinition, ItemFactory, ItemId, ItemKind, ItemRegistry};
pub use preserve::{DefaultPreserveNames, PreserveNamer, PreserveType};
pub use quality::Quality;
pub use random::{RandomSource, SequenceRandom};
pub use world::{Environment, Farmer, Location, Season, Weather};
