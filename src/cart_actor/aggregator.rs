//! Cart merge logic, free of I/O.

use super::error::CartError;
use crate::model::{Cart, CartLine, Product};

/// Returns `cart` with `quantity` units of `product` merged in. `cart` is not modified.
///
/// A product already in the cart has its line quantity incremented; the line keeps the
/// snapshot captured on the first add. A new product is appended as a fresh line.
///
/// # Errors
/// - [`CartError::InvalidInput`] for an empty product id or quantity overflow
/// - [`CartError::OutOfStock`] when `product.in_stock` is false
/// - [`CartError::InvalidQuantity`] when `quantity` is zero
pub fn add_to_cart(cart: &Cart, product: &Product, quantity: u32) -> Result<Cart, CartError> {
    let mut next = cart.clone();
    merge_into(&mut next, product, quantity)?;
    Ok(next)
}

/// [`add_to_cart`] with the product's minimum order quantity.
pub fn add_min_order(cart: &Cart, product: &Product) -> Result<Cart, CartError> {
    add_to_cart(cart, product, product.min_order_qty)
}

/// Validates and merges in place, returning the affected line.
///
/// On error `cart` is left exactly as it was.
pub(crate) fn merge_into<'c>(
    cart: &'c mut Cart,
    product: &Product,
    quantity: u32,
) -> Result<&'c CartLine, CartError> {
    if product.id.trim().is_empty() {
        return Err(CartError::InvalidInput("product id is empty".to_string()));
    }
    if !product.in_stock {
        return Err(CartError::OutOfStock(product.id.clone()));
    }
    if quantity == 0 {
        return Err(CartError::InvalidQuantity(quantity));
    }

    if !cart.contains(&product.id) {
        cart.push_line(CartLine::new(product.clone(), quantity));
    } else if let Some(line) = cart.line_mut(&product.id) {
        line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
            CartError::InvalidInput(format!(
                "quantity for {} would exceed {}",
                product.id,
                u32::MAX
            ))
        })?;
    }

    cart.get(&product.id)
        .ok_or_else(|| CartError::InvalidInput(format!("line for {} vanished", product.id)))
}
