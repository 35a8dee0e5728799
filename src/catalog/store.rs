use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use super::error::CatalogError;
use super::filter::{category_universe, ProductFilter};
use crate::model::Product;

/// Read-only list of products, populated once at startup.
///
/// Ids are validated on construction: every product must have a non-empty id and
/// no two products may share one.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        debug!(size = products.len(), "Catalog built");
        Ok(Self { products })
    }

    /// Parses a JSON array of products (camelCase fields).
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), size = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `"All"` plus every distinct category, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        category_universe(&self.products)
    }

    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        filter.apply(&self.products)
    }
}
