use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::Product;

/// One aggregated cart entry: a snapshot of the product taken on the first add,
/// plus the cumulative ordered quantity.
///
/// Serialized flat, i.e. every product field followed by `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }
}

/// The shopping cart: at most one [`CartLine`] per product id, in insertion order.
///
/// The cart is a plain value. Mutation goes through
/// [`add_to_cart`](crate::cart_actor::add_to_cart), which returns a new cart and leaves
/// its argument untouched; the [`ResourceActor`](crate::framework::ResourceActor) hosting
/// the live cart swaps the value in after each successful add.
///
/// Persisted as a JSON array of lines. Decoding merges repeated ids (first snapshot
/// wins, quantities are summed) so a hand-edited or legacy blob cannot break the
/// one-line-per-id invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: IndexMap<String, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.get(product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.lines.contains_key(product_id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Sum of quantities over all lines, recomputed on every call.
    pub fn total_items(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    pub(crate) fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.get_mut(product_id)
    }

    /// Appends a line. Callers guarantee the id is not present yet.
    pub(crate) fn push_line(&mut self, line: CartLine) {
        self.lines.insert(line.product.id.clone(), line);
    }

    /// Builds a cart from persisted lines, merging duplicate ids.
    ///
    /// Rejects lines an add could never have produced: an empty id, a zero quantity,
    /// or duplicates whose merged quantity overflows.
    fn from_lines(lines: Vec<CartLine>) -> Result<Self, String> {
        let mut cart = Cart::new();
        for line in lines {
            if line.id().trim().is_empty() {
                return Err("cart line has an empty id".to_string());
            }
            if line.quantity == 0 {
                return Err(format!("cart line {} has quantity 0", line.id()));
            }
            match cart.line_mut(line.id()) {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .checked_add(line.quantity)
                        .ok_or_else(|| format!("merged quantity for {} overflows", line.id()))?;
                }
                None => cart.push_line(line),
            }
        }
        Ok(cart)
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.lines.values())
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = Vec::<CartLine>::deserialize(deserializer)?;
        Cart::from_lines(lines).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> Product {
        Product::new("BT001", "Birlanu Premium Tea 500g", "Tea", 200.0, 250.0)
            .with_min_order(12, "boxes")
            .with_schemes(["Buy 10 Get 1 Free"])
    }

    fn coffee() -> Product {
        Product::new("BC001", "Birlanu Instant Coffee 200g", "Coffee", 180.0, 220.0)
            .with_min_order(24, "jars")
    }

    #[test]
    fn test_serde_round_trip() {
        let empty = Cart::new();
        let mut single = Cart::new();
        single.push_line(CartLine::new(tea(), 12));
        let mut many = single.clone();
        many.push_line(CartLine::new(coffee(), 48));

        for cart in [empty, single, many] {
            let json = serde_json::to_string(&cart).unwrap();
            let decoded: Cart = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, cart);
            let order: Vec<_> = decoded.lines().map(CartLine::id).collect();
            let expected: Vec<_> = cart.lines().map(CartLine::id).collect();
            assert_eq!(order, expected);
        }
    }

    #[test]
    fn test_lines_are_serialized_flat_in_camel_case() {
        let mut cart = Cart::new();
        cart.push_line(CartLine::new(tea(), 12));

        let value = serde_json::to_value(&cart).unwrap();
        let line = &value[0];
        assert_eq!(line["id"], "BT001");
        assert_eq!(line["minOrderQty"], 12);
        assert_eq!(line["inStock"], true);
        assert_eq!(line["quantity"], 12);
        assert_eq!(line["schemes"][0], "Buy 10 Get 1 Free");
    }

    #[test]
    fn test_decode_merges_duplicate_ids() {
        let first = CartLine::new(tea(), 12);
        let mut renamed = tea();
        renamed.name = "Renamed".to_string();
        let second = CartLine::new(renamed, 5);
        let json = serde_json::to_string(&vec![first, second]).unwrap();

        let cart: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart.len(), 1);
        let line = cart.get("BT001").unwrap();
        assert_eq!(line.quantity, 17);
        assert_eq!(line.product.name, "Birlanu Premium Tea 500g");
    }

    #[test]
    fn test_decode_rejects_impossible_lines() {
        let mut nameless = tea();
        nameless.id = "  ".to_string();
        let blobs = [
            vec![CartLine::new(tea(), 0)],
            vec![CartLine::new(coffee(), 3), CartLine::new(nameless, 5)],
            vec![CartLine::new(tea(), u32::MAX), CartLine::new(tea(), 7)],
        ];
        for lines in blobs {
            let json = serde_json::to_string(&lines).unwrap();
            assert!(serde_json::from_str::<Cart>(&json).is_err(), "blob {json}");
        }
    }

    #[test]
    fn test_total_items() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_items(), 0);
        cart.push_line(CartLine::new(tea(), u32::MAX));
        cart.push_line(CartLine::new(coffee(), 2));
        assert_eq!(cart.total_items(), u64::from(u32::MAX) + 2);
    }
}
