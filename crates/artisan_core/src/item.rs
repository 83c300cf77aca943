//! # Item Model
//!
//! The host's item representation as seen by the output engine.
//!
//! Items are built by type id through an [`ItemFactory`]. Two reserved ids
//! belong to the stackable light-source family and go through a separate
//! constructor that takes the stack at creation time.
//!
//! The display name is derived lazily and cached. Renaming an item drops the
//! cache; [`Item::finalize_display_name`] populates it eagerly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::preserve::PreserveType;
use crate::quality::Quality;

/// Unique identifier for an item type.
pub type ItemId = u32;

/// Item ids of the stackable light-source family (torches).
pub const LIGHT_SOURCE_IDS: [ItemId; 2] = [93, 94];

/// Name given to items the registry does not know.
pub const UNKNOWN_ITEM_NAME: &str = "Error Item";

/// Returns true if the id belongs to the light-source family.
#[inline]
#[must_use]
pub fn is_light_source_id(id: ItemId) -> bool {
    LIGHT_SOURCE_IDS.contains(&id)
}

/// Constructor path an item was built through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Generic object.
    #[default]
    Object,
    /// Stackable light source.
    LightSource,
}

/// A concrete item instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Item type id.
    pub id: ItemId,
    /// Constructor path used to build this item.
    pub kind: ItemKind,
    /// Sell price.
    pub price: i32,
    /// Quality tier.
    pub quality: Quality,
    /// Stack size.
    pub stack: i32,
    /// Preserve tag for flavored goods.
    pub preserve: Option<PreserveType>,
    /// Type id of the item this one was made from.
    pub preserved_parent_id: Option<ItemId>,
    name: String,
    display_name: Option<String>,
}

impl Item {
    /// Creates a generic object with a stack of one.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, price: i32) -> Self {
        Self {
            id,
            kind: ItemKind::Object,
            price,
            quality: Quality::Normal,
            stack: 1,
            preserve: None,
            preserved_parent_id: None,
            name: name.into(),
            display_name: None,
        }
    }

    /// Sets the quality.
    #[must_use]
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the stack.
    #[must_use]
    pub fn with_stack(mut self, stack: i32) -> Self {
        self.stack = stack;
        self
    }

    /// Returns the internal name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the item and drops the cached display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.display_name = None;
    }

    /// Returns the display name, deriving and caching it on first access.
    pub fn display_name(&mut self) -> &str {
        self.display_name.get_or_insert_with(|| self.name.clone())
    }

    /// Returns the cached display name without deriving it.
    #[must_use]
    pub fn cached_display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Derives the display name now so later reads are served from the cache.
    pub fn finalize_display_name(&mut self) {
        self.display_name = Some(self.name.clone());
    }
}

/// Builds items by type id.
pub trait ItemFactory {
    /// Creates a generic object.
    fn create(&self, id: ItemId) -> Item;

    /// Creates a light source carrying `stack` from construction.
    fn create_light_source(&self, id: ItemId, stack: i32) -> Item;
}

/// Base data for an item type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Default name.
    pub name: String,
    /// Base sell price.
    pub price: i32,
}

/// Item factory backed by a table of definitions.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, replacing any previous one for the id.
    pub fn register(&mut self, id: ItemId, name: impl Into<String>, price: i32) {
        self.definitions.insert(
            id,
            ItemDefinition {
                name: name.into(),
                price,
            },
        );
    }

    /// Looks up a definition.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(&id)
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemFactory for ItemRegistry {
    fn create(&self, id: ItemId) -> Item {
        match self.definitions.get(&id) {
            Some(def) => Item::new(id, def.name.clone(), def.price),
            None => Item::new(id, UNKNOWN_ITEM_NAME, 0),
        }
    }

    fn create_light_source(&self, id: ItemId, stack: i32) -> Item {
        let mut item = self.create(id).with_stack(stack);
        item.kind = ItemKind::LightSource;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_cached_lazily() {
        let mut item = Item::new(424, "Cheese", 230);
        assert_eq!(item.cached_display_name(), None);
        assert_eq!(item.display_name(), "Cheese");
        assert_eq!(item.cached_display_name(), Some("Cheese"));
    }

    #[test]
    fn test_rename_invalidates_cache() {
        let mut item = Item::new(424, "Cheese", 230);
        item.finalize_display_name();
        item.set_name("Goat Cheese");
        assert_eq!(item.cached_display_name(), None);
        item.finalize_display_name();
        assert_eq!(item.cached_display_name(), Some("Goat Cheese"));
    }

    #[test]
    fn test_registry_unknown_id() {
        let registry = ItemRegistry::new();
        let item = registry.create(9999);
        assert_eq!(item.name(), UNKNOWN_ITEM_NAME);
        assert_eq!(item.price, 0);
        assert_eq!(item.kind, ItemKind::Object);
    }

    #[test]
    fn test_light_source_constructor() {
        let mut registry = ItemRegistry::new();
        registry.register(93, "Torch", 5);
        let torch = registry.create_light_source(93, 5);
        assert_eq!(torch.kind, ItemKind::LightSource);
        assert_eq!(torch.stack, 5);
        assert!(is_light_source_id(93));
        assert!(is_light_source_id(94));
        assert!(!is_light_source_id(95));
    }
}
