//! Demo entry point: lists the catalog through the filter engine, then adds the
//! requested products to the persisted cart and prints it.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --search tea --add BT001 --add BG001
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn, Instrument};

use catalog_cart::config::{CliArgs, StorefrontConfig};
use catalog_cart::lifecycle::{setup_tracing, Storefront};
use catalog_cart::notify::TracingNotifier;
use catalog_cart::persistence::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StorefrontConfig::from_args(CliArgs::parse())?;
    let catalog = config.load_catalog()?;
    let store = Arc::new(FileStore::new(&config.data_dir));

    info!(data_dir = %config.data_dir.display(), "Starting storefront");
    let storefront = Storefront::new(
        catalog,
        store,
        Arc::new(TracingNotifier),
        config.channel_capacity,
    );

    println!("Categories: {}", storefront.categories().join(" | "));
    let visible = storefront.browse(&config.filter);
    println!("{} products", visible.len());
    for product in &visible {
        let discount = product
            .discount_percent()
            .map(|d| format!("{d}% OFF"))
            .unwrap_or_else(|_| "no MRP".to_string());
        let stock = if product.in_stock { "" } else { " [out of stock]" };
        println!(
            "  {:<6} {:<30} ₹{} (MRP ₹{}, {}) min {} {}{}",
            product.id,
            product.name,
            product.price,
            product.mrp,
            discount,
            product.min_order_qty,
            product.unit,
            stock
        );
    }

    let span = tracing::info_span!("add_to_cart");
    async {
        for product_id in &config.add {
            match storefront.add_to_cart(product_id, None).await {
                Ok(outcome) if !outcome.persisted => {
                    warn!(%product_id, "Added, but the cart could not be saved")
                }
                Ok(_) => {}
                Err(e) => warn!(%product_id, error = %e, "Add rejected"),
            }
        }
    }
    .instrument(span)
    .await;

    let cart = storefront.cart_client.cart().await.context("failed to read cart")?;
    println!("Cart: {} items", cart.total_items());
    for line in cart.lines() {
        println!("  {:<6} {} x {}", line.id(), line.quantity, line.product.unit);
    }

    storefront.shutdown().await?;
    Ok(())
}
