//! Custom actions for the Cart actor.
//!
//! These actions are handled by
//! [`ActorState::handle_action`](crate::framework::ActorState::handle_action) on
//! [`Cart`](crate::model::Cart).

use crate::model::{CartLine, Product};

/// Operations the Cart actor performs on the live cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merges `product` into the cart.
    ///
    /// # Arguments
    /// * `product` - Snapshot to store if the product is not in the cart yet
    /// * `quantity` - Amount to add; `None` means the product's minimum order quantity
    ///
    /// # Errors
    /// Fails for an empty id, an out-of-stock product, a zero quantity, or a
    /// cumulative quantity that no longer fits in a `u32`.
    Add {
        product: Product,
        quantity: Option<u32>,
    },
    /// Returns the sum of all line quantities without modifying the cart.
    TotalItems,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The merged line, the new item total, and whether the write-through succeeded.
    Added {
        line: CartLine,
        total_items: u64,
        persisted: bool,
    },
    TotalItems(u64),
}
