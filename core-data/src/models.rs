//! Domain models
//!
//! Both entities are immutable value records. Their serde field names are the
//! wire shape every bridge adapter exposes, so renaming a field is a breaking
//! change for all hosts.

use serde::{Deserialize, Serialize};

/// Application user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, never empty
    pub id: String,
    /// Full display name
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("User id cannot be empty".to_string());
        }
        Ok(())
    }

    /// Case-insensitive substring match on the name.
    pub fn name_matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, never empty
    pub id: String,
    pub title: String,
    pub description: String,
    /// Price in USD, finite and non-negative
    pub price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            price,
        }
    }

    /// Validate the product
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Product id cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!(
                "Product {} has invalid price {}",
                self.id, self.price
            ));
        }
        Ok(())
    }

    /// Case-insensitive substring match on title or description.
    pub fn text_matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query) || contains_ignore_case(&self.description, query)
    }

    /// Inclusive on both bounds.
    pub fn price_within(&self, min_price: f64, max_price: f64) -> bool {
        self.price >= min_price && self.price <= max_price
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
