//! The filter engine: derives the visible subset of the catalog from a free-text
//! search term and a category selection.
//!
//! Everything here is pure. Results keep catalog order; nothing is ranked or sorted.

use crate::model::Product;

/// Category sentinel that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Search term plus category selection.
///
/// The default filter (`""`, [`ALL_CATEGORIES`]) matches every product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    search_term: String,
    category: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProductFilter {
    pub fn new(search_term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// True when the product passes both the search and the category check.
    pub fn matches(&self, product: &Product) -> bool {
        self.matcher().matches(product)
    }

    /// The matching products, in input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let matcher = self.matcher();
        products.iter().filter(|p| matcher.matches(p)).collect()
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: self.search_term.to_lowercase(),
            category: &self.category,
        }
    }
}

// Lowercases the search term once per pass instead of once per product.
struct Matcher<'f> {
    needle: String,
    category: &'f str,
}

impl Matcher<'_> {
    fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        self.needle.is_empty()
            || product.name.to_lowercase().contains(&self.needle)
            || product.description.to_lowercase().contains(&self.needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category == ALL_CATEGORIES || self.category == product.category
    }
}

/// Products whose name or description contains `search_term` (case-insensitive) and
/// whose category equals `category` exactly, unless `category` is [`ALL_CATEGORIES`].
///
/// Case folding is Unicode lowercase without locale rules.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    category: &str,
) -> Vec<&'a Product> {
    ProductFilter::new(search_term, category).apply(products)
}

/// [`ALL_CATEGORIES`] followed by each distinct category of `products`, first-seen order.
pub fn category_universe(products: &[Product]) -> Vec<&str> {
    let mut categories = vec![ALL_CATEGORIES];
    for product in products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(&product.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_products;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let catalog = demo_products();
        let all = filter_products(&catalog, "", ALL_CATEGORIES);
        let expected: Vec<String> = catalog.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids(&all), expected);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_description() {
        let catalog = demo_products();

        let tea = filter_products(&catalog, "TEA", ALL_CATEGORIES);
        let names: Vec<_> = tea.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"Birlanu Green Tea 100g"));
        assert!(!names.contains(&"Birlanu Instant Coffee 200g"));
        // "Masala Chai" only mentions tea through its category, not its text
        assert!(!names.contains(&"Birlanu Masala Chai 250g"));

        // Description-only match
        let morning = filter_products(&catalog, "morning brew", ALL_CATEGORIES);
        assert_eq!(ids(&morning), vec!["BC001"]);
    }

    #[test]
    fn test_category_is_exact_and_combined_with_search() {
        let catalog = demo_products();

        let coffee = filter_products(&catalog, "", "Coffee");
        assert_eq!(ids(&coffee), vec!["BC001", "BS001"]);

        assert!(filter_products(&catalog, "", "coffee").is_empty());

        let special = filter_products(&catalog, "special", "Coffee");
        assert_eq!(ids(&special), vec!["BS001"]);
        assert!(filter_products(&catalog, "special", "Tea").is_empty());
    }

    #[test]
    fn test_category_universe() {
        let catalog = demo_products();
        assert_eq!(category_universe(&catalog), vec!["All", "Tea", "Coffee"]);
        assert_eq!(category_universe(&[]), vec!["All"]);
    }

    #[test]
    fn test_empty_catalog_filters_to_nothing() {
        assert!(filter_products(&[], "", ALL_CATEGORIES).is_empty());
        assert!(filter_products(&[], "tea", "Tea").is_empty());
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert_eq!(filter.category(), ALL_CATEGORIES);
        assert!(demo_products().iter().all(|p| filter.matches(p)));
    }
}
