//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle management**: Starting, wiring, and shutting down the Cart actor
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`Storefront`] - Owns the catalog and the running Cart actor
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod storefront;
pub mod tracing;

pub use storefront::*;
pub use tracing::*;
