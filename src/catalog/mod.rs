//! The catalog store and the filter engine that derives visible products from it.

pub mod error;
pub mod filter;
mod seed;
pub mod store;

pub use error::*;
pub use filter::*;
pub use seed::demo_products;
pub use store::*;
