//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The output uses a compact
//! format that hides the crate/module prefix (`with_target(false)`); the actor logs carry
//! an `entity_type` field instead.
//!
//! ```bash
//! # Actor lifecycle, adds, and notifier output
//! RUST_LOG=info cargo run -- --add BT001
//!
//! # Full action payloads, hydration and persistence details
//! RUST_LOG=debug cargo run -- --add BT001
//!
//! # Only the persistence layer
//! RUST_LOG=catalog_cart::persistence=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Cart hydrated`, `Shutdown`
//! - **Actions**: `Action ok` / `Action failed` with the error
//! - **Write-through**: a `warn` event whenever the store rejects a write
//! - **Notices**: one `info` event per successful add, e.g.
//!
//! ```text
//! INFO Actor started entity_type="Cart"
//! INFO Cart hydrated lines=0 total_items=0
//! INFO add_to_cart: Birlanu Premium Tea 500g (12 boxes) added to cart product_id=BT001
//!     quantity=12 unit=boxes
//! INFO Action ok entity_type="Cart"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
