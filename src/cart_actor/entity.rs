//! ActorState trait implementation for the Cart domain type.
//!
//! The live cart is hydrated from the persisted store in `on_start`, then every
//! successful add is written through to the same store and announced to the notifier.
//! A failed write is logged and reported in the result; the in-memory cart stays the
//! source of truth for the session.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use super::actions::{CartAction, CartActionResult};
use super::aggregator::merge_into;
use super::error::CartError;
use crate::framework::ActorState;
use crate::model::Cart;
use crate::notify::{AddedToCart, CartNotifier};
use crate::persistence::{self, KeyValueStore};

/// Dependencies injected into the Cart actor when it starts running.
#[derive(Clone)]
pub struct CartContext {
    pub store: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn CartNotifier>,
}

impl CartContext {
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn CartNotifier>) -> Self {
        Self { store, notifier }
    }
}

#[async_trait]
impl ActorState for Cart {
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;
    type Error = CartError;

    /// Replaces the state with the persisted cart (empty if absent or unreadable).
    async fn on_start(&mut self, ctx: &CartContext) -> Result<(), CartError> {
        *self = persistence::load_cart(ctx.store.as_ref()).await;
        info!(lines = self.len(), total_items = self.total_items(), "Cart hydrated");
        Ok(())
    }

    /// # Actions
    /// - `Add`: merges the product, writes the full cart through, notifies
    /// - `TotalItems`: sums line quantities
    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add { product, quantity } => {
                let quantity = quantity.unwrap_or(product.min_order_qty);

                // merge_into leaves the cart untouched when it rejects the add
                let line = merge_into(self, &product, quantity)?.clone();

                let persisted = match persistence::save_cart(ctx.store.as_ref(), self).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(
                            product_id = %product.id,
                            error = %e,
                            "Write-through failed, keeping in-memory cart"
                        );
                        false
                    }
                };

                ctx.notifier.item_added(&AddedToCart {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    quantity,
                    unit: product.unit.clone(),
                });

                Ok(CartActionResult::Added {
                    line,
                    total_items: self.total_items(),
                    persisted,
                })
            }
            CartAction::TotalItems => Ok(CartActionResult::TotalItems(self.total_items())),
        }
    }
}
