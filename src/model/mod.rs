//! Pure data structures: catalog products and the cart built from them.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
