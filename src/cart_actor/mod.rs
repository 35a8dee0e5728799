//! Cart-specific resource logic: the merge rules and the actor that hosts the live cart.

mod actions;
pub mod aggregator;
pub mod entity;
pub mod error;

pub use actions::*;
pub use aggregator::{add_min_order, add_to_cart};
pub use entity::CartContext;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Channel capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 32;

/// Creates a new Cart actor and its client.
///
/// The actor starts from an empty cart and hydrates from the store once `run` is called.
pub fn new(capacity: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(capacity.max(1), Cart::new());
    let client = CartClient::new(generic_client);

    (actor, client)
}
