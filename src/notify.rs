//! Hook invoked after each successful add, for user feedback.

use std::fmt;

use tracing::info;

/// What was just added to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToCart {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit: String,
}

impl fmt::Display for AddedToCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}) added to cart",
            self.product_name, self.quantity, self.unit
        )
    }
}

/// Receives one notice per successful add. Never called for rejected adds.
pub trait CartNotifier: Send + Sync {
    fn item_added(&self, notice: &AddedToCart);
}

/// Emits each notice as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl CartNotifier for TracingNotifier {
    fn item_added(&self, notice: &AddedToCart) {
        info!(
            product_id = %notice.product_id,
            quantity = notice.quantity,
            unit = %notice.unit,
            "{notice}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_message() {
        let notice = AddedToCart {
            product_id: "BT001".to_string(),
            product_name: "Birlanu Premium Tea 500g".to_string(),
            quantity: 12,
            unit: "boxes".to_string(),
        };
        assert_eq!(
            notice.to_string(),
            "Birlanu Premium Tea 500g (12 boxes) added to cart"
        );
    }
}
