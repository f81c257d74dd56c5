//! Product provider trait and in-memory implementation

use crate::error::{DataError, Result};
use crate::models::Product;
use crate::repositories::{ensure_unique_ids, simulate_latency};
use crate::seed;
use async_trait::async_trait;
use bridge_traits::platform::PlatformSendSync;
use core_runtime::config::LatencyConfig;
use tracing::debug;

/// Product provider interface
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ProductRepository: PlatformSendSync {
    /// All products, in source order
    async fn list(&self) -> Result<Vec<Product>>;

    /// Find a product by exact id
    ///
    /// # Returns
    /// - `Ok(Some(product))` if found
    /// - `Ok(None)` if not found
    /// - `Err` if the data source fails
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Products whose title or description contains `query`, ignoring case
    async fn search(&self, query: &str) -> Result<Vec<Product>>;

    /// Products priced within `[min_price, max_price]`
    ///
    /// Bounds are not validated here.
    async fn find_by_price_range(&self, min_price: f64, max_price: f64) -> Result<Vec<Product>>;
}

/// Seeded, read-only product provider
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
    latency: LatencyConfig,
}

impl InMemoryProductRepository {
    /// Sample products with the default simulated latency
    pub fn new() -> Self {
        Self::with_latency(LatencyConfig::default())
    }

    /// Sample products with custom latency
    pub fn with_latency(latency: LatencyConfig) -> Self {
        Self {
            products: seed::sample_products(),
            latency,
        }
    }

    /// Custom products
    ///
    /// # Errors
    /// Returns [`DataError::InvalidSeed`] for an empty id, a negative or
    /// non-finite price, or a repeated id.
    pub fn from_products(products: Vec<Product>, latency: LatencyConfig) -> Result<Self> {
        for product in &products {
            product.validate().map_err(|message| DataError::InvalidSeed {
                entity: "Product".to_string(),
                message,
            })?;
        }
        ensure_unique_ids("Product", products.iter().map(|p| p.id.as_str()))?;
        Ok(Self { products, latency })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        simulate_latency(self.latency.list_products).await;
        Ok(self.products.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        simulate_latency(self.latency.find_product).await;
        let product = self.products.iter().find(|p| p.id == id).cloned();
        debug!(product_id = id, found = product.is_some(), "Product lookup");
        Ok(product)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        simulate_latency(self.latency.search_products).await;
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.text_matches(query))
            .cloned()
            .collect();
        debug!(query, matches = matches.len(), "Product search");
        Ok(matches)
    }

    async fn find_by_price_range(&self, min_price: f64, max_price: f64) -> Result<Vec<Product>> {
        simulate_latency(self.latency.products_by_price).await;
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.price_within(min_price, max_price))
            .cloned()
            .collect();
        debug!(min_price, max_price, matches = matches.len(), "Price range filter");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryProductRepository {
        InMemoryProductRepository::with_latency(LatencyConfig::disabled())
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[core_async::test]
    async fn test_list_preserves_seed_order() {
        let products = repo().list().await.unwrap();
        assert_eq!(ids(&products), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[core_async::test]
    async fn test_find_by_id() {
        let repo = repo();
        let laptop = repo.find_by_id("3").await.unwrap().unwrap();
        assert_eq!(laptop.title, "Laptop");
        assert_eq!(laptop.price, 1299.99);

        assert!(repo.find_by_id("99").await.unwrap().is_none());
    }

    #[core_async::test]
    async fn test_search_matches_title_or_description() {
        let repo = repo();

        // "bluetooth" is in the headphones description and the speaker title
        let bluetooth = repo.search("BLUETOOTH").await.unwrap();
        assert_eq!(ids(&bluetooth), vec!["1", "6"]);

        let smart = repo.search("smart").await.unwrap();
        assert_eq!(ids(&smart), vec!["2", "4"]);

        assert!(repo.search("refrigerator").await.unwrap().is_empty());
    }

    #[core_async::test]
    async fn test_price_range_is_inclusive() {
        let repo = repo();

        let mid = repo.find_by_price_range(100.0, 300.0).await.unwrap();
        assert_eq!(ids(&mid), vec!["1", "4"]);

        let exact = repo.find_by_price_range(399.99, 399.99).await.unwrap();
        assert_eq!(ids(&exact), vec!["5"]);

        let edges = repo.find_by_price_range(79.99, 199.99).await.unwrap();
        assert_eq!(ids(&edges), vec!["1", "6"]);
    }

    #[core_async::test]
    async fn test_price_range_unbounded_max() {
        let all = repo().find_by_price_range(0.0, f64::INFINITY).await.unwrap();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_from_products_rejects_negative_price() {
        let result = InMemoryProductRepository::from_products(
            vec![Product::new("1", "Broken", "Negative", -5.0)],
            LatencyConfig::disabled(),
        );
        assert!(matches!(result, Err(DataError::InvalidSeed { .. })));
    }

    #[test]
    fn test_from_products_rejects_duplicates() {
        let result = InMemoryProductRepository::from_products(
            vec![
                Product::new("7", "A", "a", 1.0),
                Product::new("7", "B", "b", 2.0),
            ],
            LatencyConfig::disabled(),
        );
        assert!(result.is_err());
    }
}
