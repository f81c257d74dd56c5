//! # Query Operations
//!
//! Validation and default-policy wrappers around the data providers. Each
//! query checks its inputs before touching a provider and otherwise passes
//! the provider's answer through unchanged:
//!
//! - blank ids are rejected with [`CoreError::InvalidArgument`]
//! - a blank search query means "no filter" and lists everything
//! - price ranges are checked for NaN, then a negative minimum, then `max < min`
//!
//! Not-found is `Ok(None)`, never an error.

pub mod product;
pub mod user;

pub use product::{GetProductByIdQuery, GetProductsQuery};
pub use user::{GetUserByIdQuery, GetUsersQuery};

use crate::error::{CoreError, Result};

/// Whitespace-only counts as blank.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn require_id(id: &str, message: &str) -> Result<()> {
    if is_blank(id) {
        return Err(CoreError::invalid(message));
    }
    Ok(())
}

pub(crate) fn validate_price_range(min_price: f64, max_price: f64) -> Result<()> {
    if min_price.is_nan() || max_price.is_nan() {
        return Err(CoreError::invalid("Price bounds must be valid numbers"));
    }
    if min_price < 0.0 {
        return Err(CoreError::invalid("Minimum price cannot be negative"));
    }
    if max_price < min_price {
        return Err(CoreError::invalid(
            "Maximum price must be greater than or equal to minimum price",
        ));
    }
    Ok(())
}
