use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::cart_actor::DEFAULT_CAPACITY;
use crate::catalog::{demo_products, CatalogStore, ProductFilter, ALL_CATEGORIES};

const DEFAULT_DATA_DIR: &str = ".catalog-cart";

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "catalog-cart", about = "Browse the product catalog and build a cart", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "CATALOG_CART_DATA_DIR",
        value_name = "DIR",
        help = "Directory holding the persisted cart"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long,
        env = "CATALOG_CART_CATALOG",
        value_name = "FILE",
        help = "JSON catalog to load instead of the built-in demo catalog"
    )]
    pub catalog: Option<PathBuf>,

    #[arg(
        long,
        env = "CATALOG_CART_CHANNEL_CAPACITY",
        value_name = "N",
        help = "Capacity of the cart actor's request channel",
        value_parser = clap::value_parser!(usize)
    )]
    pub channel_capacity: Option<usize>,

    #[arg(long, value_name = "TEXT", help = "Case-insensitive search on name and description")]
    pub search: Option<String>,

    #[arg(long, value_name = "CATEGORY", help = "Exact category to show (default: All)")]
    pub category: Option<String>,

    #[arg(
        long = "add",
        value_name = "PRODUCT_ID",
        help = "Add the product's minimum order quantity to the cart (repeatable)"
    )]
    pub add: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub channel_capacity: usize,
    pub filter: ProductFilter,
    pub add: Vec<String>,
}

impl StorefrontConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            data_dir,
            catalog,
            channel_capacity,
            search,
            category,
            add,
        } = args;

        let data_dir = data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let channel_capacity = channel_capacity.unwrap_or(DEFAULT_CAPACITY).max(1);

        if let Some(path) = catalog.as_ref() {
            anyhow::ensure!(path.is_file(), "configured catalog {:?} is not a file", path);
        }

        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        let filter = ProductFilter::new(search.unwrap_or_default(), category);

        let add = add
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        Ok(Self {
            data_dir,
            catalog_path: catalog,
            channel_capacity,
            filter,
            add,
        })
    }

    /// The configured catalog file, or the demo catalog when none is set.
    pub fn load_catalog(&self) -> Result<CatalogStore> {
        match self.catalog_path.as_ref() {
            Some(path) => CatalogStore::from_path(path)
                .with_context(|| format!("failed to load catalog {:?}", path)),
            None => CatalogStore::new(demo_products()).context("demo catalog is invalid"),
        }
    }
}
