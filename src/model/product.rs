use serde::{Deserialize, Serialize};

use crate::pricing::{self, PricingError};

/// A purchasable catalog item.
///
/// Products are supplied by the [`CatalogStore`](crate::catalog::CatalogStore) and never
/// mutated afterwards. The serialized form uses camelCase field names (`minOrderQty`,
/// `inStock`, ...), which is also the layout of each persisted cart line.
///
/// `price <= mrp` is expected but not enforced; see [`Product::discount_percent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub mrp: f64,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    pub in_stock: bool,
    /// Promotional labels, display-only.
    #[serde(default)]
    pub schemes: Vec<String>,
    /// Default and minimum order quantity.
    pub min_order_qty: u32,
    /// Label for the quantity unit, e.g. `"boxes"`.
    pub unit: String,
}

impl Product {
    /// Creates a new in-stock Product with an empty description, no schemes,
    /// a zero rating and a minimum order of one unit.
    ///
    /// # Arguments
    /// * `id` - Unique, stable identifier
    /// * `name` - Display name
    /// * `category` - Category label used by the filter engine
    /// * `price` - Selling price
    /// * `mrp` - Maximum retail price
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        mrp: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            price,
            mrp,
            rating: 0.0,
            in_stock: true,
            schemes: Vec::new(),
            min_order_qty: 1,
            unit: "units".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the minimum order quantity and its unit label.
    pub fn with_min_order(mut self, min_order_qty: u32, unit: impl Into<String>) -> Self {
        self.min_order_qty = min_order_qty;
        self.unit = unit.into();
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Percentage saved against the MRP, see [`pricing::discount_percent`].
    pub fn discount_percent(&self) -> Result<i64, PricingError> {
        pricing::discount_percent(self.price, self.mrp)
    }
}
