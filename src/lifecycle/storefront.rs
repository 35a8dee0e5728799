use std::sync::Arc;

use tracing::{debug, error, info};

use crate::cart_actor::{self, CartContext, CartError};
use crate::catalog::{CatalogStore, ProductFilter};
use crate::clients::{AddOutcome, CartClient};
use crate::framework::FrameworkError;
use crate::model::Product;
use crate::notify::CartNotifier;
use crate::persistence::KeyValueStore;

/// The runtime orchestrator for catalog browsing and the cart.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Cart actor
/// - **Dependency Wiring**: Injecting the persisted store and notifier into the actor
/// - **Catalog Access**: Serving filtered views of the read-only catalog
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(catalog, store, Arc::new(TracingNotifier), 32);
///
/// let visible = storefront.browse(&ProductFilter::new("tea", "All"));
/// storefront.add_to_cart("BT001", None).await?;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// The read-only catalog.
    pub catalog: Arc<CatalogStore>,

    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Creates the Cart actor and spawns it with its dependencies.
    ///
    /// The actor hydrates the cart from `store` before serving any request, so the first
    /// read through `cart_client` already sees the persisted cart.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        catalog: CatalogStore,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn CartNotifier>,
        capacity: usize,
    ) -> Self {
        let (cart_actor, cart_client) = cart_actor::new(capacity);
        let handle = tokio::spawn(cart_actor.run(CartContext::new(store, notifier)));
        info!(products = catalog.len(), "Storefront started");

        Self {
            catalog: Arc::new(catalog),
            cart_client,
            handle,
        }
    }

    /// Products passing `filter`, in catalog order.
    pub fn browse(&self, filter: &ProductFilter) -> Vec<&Product> {
        let visible = self.catalog.filter(filter);
        debug!(
            search_term = filter.search_term(),
            category = filter.category(),
            visible = visible.len(),
            "Browse"
        );
        visible
    }

    pub fn categories(&self) -> Vec<&str> {
        self.catalog.categories()
    }

    /// Looks `product_id` up in the catalog and adds it to the cart.
    ///
    /// `None` adds the product's minimum order quantity.
    pub async fn add_to_cart(
        &self,
        product_id: &str,
        quantity: Option<u32>,
    ) -> Result<AddOutcome, CartError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CartError::UnknownProduct(product_id.to_string()))?;
        self.cart_client.add(product, quantity).await
    }

    /// Gracefully shuts down the Cart actor.
    ///
    /// Dropping the client closes the channel; the actor drains pending requests,
    /// exits its loop, and the task is joined.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down storefront...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(FrameworkError::TaskFailed(e.to_string()));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
