//! # Catalog Cart
//!
//! > **Browse a product catalog, aggregate a cart, keep it across restarts.**
//!
//! This crate holds a read-only catalog of products, derives filtered views of it from a
//! search term and a category, and accumulates selected products into a cart that is
//! written through to a key-value store after every change.
//!
//! ## 🏗️ Design
//!
//! ### Pure core, stateful shell
//! The filter engine ([`catalog::filter_products`]) and the merge rules
//! ([`cart_actor::add_to_cart`]) are plain functions over values. Only the live cart has
//! state, and it is owned by a single [`ResourceActor`](framework::ResourceActor) running
//! in its own Tokio task.
//!
//! ### One writer, no locks
//! The actor processes requests sequentially, each to completion. Concurrent callers are
//! serialized through its channel, so the cart never needs a `Mutex`.
//!
//! ### Dependencies are injected, not ambient
//! The persisted store ([`persistence::KeyValueStore`]) and the notification sink
//! ([`notify::CartNotifier`]) are passed to the actor's `run()`. Tests swap in a
//! [`MemoryStore`](persistence::MemoryStore), a failing store, or a recording notifier.
//!
//! ### Persistence fails soft
//! A missing or corrupt persisted cart hydrates as an empty cart. A failed write is
//! logged and reported (`persisted: false`) but never rolls back the in-memory cart.
//!
//! ### Observability
//! We use `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`Product`](model::Product), [`CartLine`](model::CartLine), [`Cart`](model::Cart).
//! - [`catalog`]: the [`CatalogStore`](catalog::CatalogStore) and the filter engine.
//! - [`pricing`]: [`discount_percent`](pricing::discount_percent).
//! - [`cart_actor`]: merge rules and the `ActorState` implementation for `Cart`.
//! - [`framework`]: the generic actor, its client, and [`mock`](framework::mock) helpers.
//! - [`clients`]: [`CartClient`](clients::CartClient), the typed front of the Cart actor.
//! - [`persistence`]: store backends and the cart codec.
//! - [`lifecycle`]: the [`Storefront`](lifecycle::Storefront) orchestrator and tracing setup.
//! - [`config`]: command-line and environment configuration for the demo binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --search tea --add BT001
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod persistence;
pub mod pricing;
