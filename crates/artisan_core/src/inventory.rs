//! # Fuel Inventory
//!
//! Pre-allocated slots holding the fuel a producer can draw from.
//! Answers the engine's fuel checks and supports all-or-nothing removal
//! through snapshots.

use crate::error::{CoreError, CoreResult};
use crate::item::ItemId;

/// Fuel held in one occupied slot. Any `ItemId`, including 0, is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FuelStack {
    item_id: ItemId,
    count: u32,
}

/// Maximum inventory slots.
pub const MAX_INVENTORY_SLOTS: usize = 36;

/// Default maximum stack per slot.
pub const DEFAULT_MAX_STACK: u32 = 999;

/// A pre-allocated fuel inventory.
#[derive(Clone, Debug)]
pub struct Inventory {
    slots: [Option<FuelStack>; MAX_INVENTORY_SLOTS],
    used_slots: u32,
}

impl Inventory {
    /// Creates a new empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [None; MAX_INVENTORY_SLOTS],
            used_slots: 0,
        }
    }

    /// Returns the number of used slots.
    #[inline]
    #[must_use]
    pub const fn used_slots(&self) -> u32 {
        self.used_slots
    }

    /// Counts the total number of a specific item across all slots.
    #[must_use]
    pub fn count_item(&self, item_id: ItemId) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.item_id == item_id)
            .map(|s| s.count)
            .sum()
    }

    /// Returns true if at least `amount` of the item is held.
    #[must_use]
    pub fn has(&self, item_id: ItemId, amount: u32) -> bool {
        self.count_item(item_id) >= amount
    }

    fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Adds items, stacking onto existing slots first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InventoryFull` if there's no space. Items placed
    /// before running out of space stay in the inventory.
    pub fn add(&mut self, item_id: ItemId, count: u32) -> CoreResult<()> {
        let mut remaining = count;

        for slot in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }

            if slot.item_id == item_id && slot.count < DEFAULT_MAX_STACK {
                let can_add = (DEFAULT_MAX_STACK - slot.count).min(remaining);
                slot.count += can_add;
                remaining -= can_add;
            }
        }

        while remaining > 0 {
            let Some(slot_idx) = self.find_empty_slot() else {
                return Err(CoreError::InventoryFull {
                    capacity: MAX_INVENTORY_SLOTS as u32,
                    amount: remaining,
                });
            };
            let add_count = remaining.min(DEFAULT_MAX_STACK);
            self.slots[slot_idx] = Some(FuelStack {
                item_id,
                count: add_count,
            });
            self.used_slots += 1;
            remaining -= add_count;
        }

        Ok(())
    }

    /// Removes items.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsufficientItems` if not enough items; nothing is
    /// removed in that case.
    pub fn remove(&mut self, item_id: ItemId, count: u32) -> CoreResult<()> {
        let available = self.count_item(item_id);
        if available < count {
            return Err(CoreError::InsufficientItems {
                item_id,
                required: count,
                available,
            });
        }

        let mut remaining = count;

        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            let Some(stack) = slot.as_mut().filter(|s| s.item_id == item_id) else {
                continue;
            };

            let remove_count = stack.count.min(remaining);
            stack.count -= remove_count;
            remaining -= remove_count;

            if stack.count == 0 {
                *slot = None;
                self.used_slots = self.used_slots.saturating_sub(1);
            }
        }

        Ok(())
    }

    /// Creates a snapshot of the inventory for rollback.
    #[must_use]
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            slots: self.slots,
            used_slots: self.used_slots,
        }
    }

    /// Restores inventory from a snapshot.
    pub fn restore(&mut self, snapshot: &InventorySnapshot) {
        self.slots = snapshot.slots;
        self.used_slots = snapshot.used_slots;
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of inventory state for rollback.
#[derive(Clone, Debug)]
pub struct InventorySnapshot {
    slots: [Option<FuelStack>; MAX_INVENTORY_SLOTS],
    used_slots: u32,
}
