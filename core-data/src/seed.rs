//! Fixed sample data served by the in-memory providers.

use crate::models::{Product, User};

pub fn sample_users() -> Vec<User> {
    vec![
        User::new("1", "John Doe", "john.doe@example.com"),
        User::new("2", "Jane Smith", "jane.smith@example.com"),
        User::new("3", "Bob Johnson", "bob.johnson@example.com"),
        User::new("4", "Alice Brown", "alice.brown@example.com"),
        User::new("5", "Charlie Wilson", "charlie.wilson@example.com"),
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Wireless Headphones",
            "High-quality bluetooth wireless headphones with noise cancellation",
            199.99,
        ),
        Product::new(
            "2",
            "Smartphone",
            "Latest flagship smartphone with advanced camera and 5G connectivity",
            799.99,
        ),
        Product::new(
            "3",
            "Laptop",
            "Powerful laptop for gaming and professional work",
            1299.99,
        ),
        Product::new(
            "4",
            "Smart Watch",
            "Fitness tracking smartwatch with heart rate monitor",
            299.99,
        ),
        Product::new(
            "5",
            "Tablet",
            "10-inch tablet perfect for reading and media consumption",
            399.99,
        ),
        Product::new(
            "6",
            "Bluetooth Speaker",
            "Portable bluetooth speaker with excellent sound quality",
            79.99,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let user_ids: HashSet<_> = sample_users().into_iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), sample_users().len());

        let product_ids: HashSet<_> = sample_products().into_iter().map(|p| p.id).collect();
        assert_eq!(product_ids.len(), sample_products().len());
    }

    #[test]
    fn test_seed_is_valid() {
        assert!(sample_users().iter().all(|u| u.validate().is_ok()));
        assert!(sample_products().iter().all(|p| p.validate().is_ok()));
    }
}
