//! Write-through persistence of the cart.
//!
//! The whole cart is stored as one JSON blob under [`CART_KEY`]. Reads fail closed:
//! a missing, unreadable or malformed blob hydrates as an empty cart so a broken store
//! can never block catalog browsing. Writes report failures to the caller, which logs
//! them and carries on with the in-memory cart.
//!
//! Concurrent sessions sharing one store are last-write-wins; nothing here merges
//! carts written by another process.

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use tracing::{debug, warn};

use crate::model::Cart;

/// Well-known key the cart is persisted under.
pub const CART_KEY: &str = "cart";

pub fn encode_cart(cart: &Cart) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart)
}

pub fn decode_cart(blob: &str) -> Result<Cart, serde_json::Error> {
    serde_json::from_str(blob)
}

/// Reads the persisted cart, returning an empty cart on any failure.
pub async fn load_cart(store: &dyn KeyValueStore) -> Cart {
    match store.get(CART_KEY).await {
        Ok(Some(blob)) => match decode_cart(&blob) {
            Ok(cart) => {
                debug!(lines = cart.len(), "Persisted cart decoded");
                cart
            }
            Err(e) => {
                warn!(error = %e, "Persisted cart is malformed, starting empty");
                Cart::new()
            }
        },
        Ok(None) => {
            debug!("No persisted cart, starting empty");
            Cart::new()
        }
        Err(e) => {
            warn!(error = %e, "Failed to read persisted cart, starting empty");
            Cart::new()
        }
    }
}

/// Serializes the full cart and writes it under [`CART_KEY`].
pub async fn save_cart(store: &dyn KeyValueStore, cart: &Cart) -> Result<(), PersistError> {
    let blob = encode_cart(cart)?;
    store.set(CART_KEY, blob).await?;
    debug!(lines = cart.len(), "Cart persisted");
    Ok(())
}
