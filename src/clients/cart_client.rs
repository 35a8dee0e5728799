use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartLine, Product};

/// Outcome of a successful add.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    /// The merged line as it now stands in the cart.
    pub line: CartLine,
    /// Sum of quantities across the whole cart after the add.
    pub total_items: u64,
    /// False when the write-through to the store failed (the add still took effect).
    pub persisted: bool,
}

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    /// Adds the product's minimum order quantity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: &Product) -> Result<AddOutcome, CartError> {
        self.add(product, None).await
    }

    /// Adds an explicit quantity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_quantity(
        &self,
        product: &Product,
        quantity: u32,
    ) -> Result<AddOutcome, CartError> {
        self.add(product, Some(quantity)).await
    }

    pub(crate) async fn add(
        &self,
        product: &Product,
        quantity: Option<u32>,
    ) -> Result<AddOutcome, CartError> {
        debug!(?quantity, "Sending add to actor");
        let action = CartAction::Add {
            product: product.clone(),
            quantity,
        };
        match self.inner.perform_action(action).await.map_err(Self::map_error)? {
            CartActionResult::Added {
                line,
                total_items,
                persisted,
            } => Ok(AddOutcome {
                line,
                total_items,
                persisted,
            }),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn total_items(&self) -> Result<u64, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(CartAction::TotalItems)
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::TotalItems(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    /// A copy of the current cart.
    pub async fn cart(&self) -> Result<Cart, CartError> {
        self.snapshot().await
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected reply: {result:?}"))
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    /// Entity errors are unboxed back into [`CartError`]; transport failures become
    /// [`CartError::ActorCommunicationError`].
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
