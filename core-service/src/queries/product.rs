//! Product queries

use crate::error::Result;
use crate::queries::{is_blank, require_id, validate_price_range};
use core_data::{Product, ProductRepository};
use std::sync::Arc;
use tracing::debug;

/// Lists, searches and filters products.
#[derive(Clone)]
pub struct GetProductsQuery {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductsQuery {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// All products in provider order.
    pub async fn execute(&self) -> Result<Vec<Product>> {
        Ok(self.repository.list().await?)
    }

    /// Products whose title or description contains `query`, ignoring case.
    ///
    /// A blank query returns the full list.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        if is_blank(query) {
            debug!("Blank product search, listing all products");
            return self.execute().await;
        }
        Ok(self.repository.search(query).await?)
    }

    /// Products priced within `[min_price, max_price]`.
    ///
    /// # Errors
    /// [`CoreError::InvalidArgument`](crate::CoreError::InvalidArgument) if
    /// either bound is NaN, `min_price` is negative, or `max_price < min_price`,
    /// checked in that order.
    pub async fn by_price_range(&self, min_price: f64, max_price: f64) -> Result<Vec<Product>> {
        validate_price_range(min_price, max_price)?;
        Ok(self
            .repository
            .find_by_price_range(min_price, max_price)
            .await?)
    }
}

/// Looks up a single product.
#[derive(Clone)]
pub struct GetProductByIdQuery {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductByIdQuery {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, product_id: &str) -> Result<Option<Product>> {
        require_id(product_id, "Product ID cannot be blank")?;
        Ok(self.repository.find_by_id(product_id).await?)
    }
}
