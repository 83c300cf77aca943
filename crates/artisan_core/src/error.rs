//! # Core Error Types
//!
//! Errors raised by the host-side model.

use thiserror::Error;

use crate::item::ItemId;

/// Errors that can occur in the host-side model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A quality tier outside of 0, 1, 2 and 4.
    #[error("invalid quality tier: {0}")]
    InvalidQuality(u8),

    /// Attempted to remove more items than the inventory holds.
    #[error("insufficient items: need {required} of item {item_id}, have {available}")]
    InsufficientItems {
        /// The item that was missing.
        item_id: ItemId,
        /// The amount required.
        required: u32,
        /// The amount available.
        available: u32,
    },

    /// Inventory is full, cannot add more items.
    #[error("inventory full: capacity {capacity}, tried to add {amount}")]
    InventoryFull {
        /// Current capacity.
        capacity: u32,
        /// Amount tried to add.
        amount: u32,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
