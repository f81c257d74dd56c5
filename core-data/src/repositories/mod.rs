//! # Data Providers
//!
//! One provider trait per entity. The in-memory implementations own a fixed,
//! ordered collection and answer read-only queries against it after a
//! simulated delay; network or database backed implementations plug in behind
//! the same traits without touching the query layer or the facade.
//!
//! - `UserRepository` - list, lookup by id, name search
//! - `ProductRepository` - list, lookup by id, title/description search, price range

pub mod product;
pub mod user;

pub use product::{InMemoryProductRepository, ProductRepository};
pub use user::{InMemoryUserRepository, UserRepository};

use crate::error::{DataError, Result};
use std::collections::HashSet;
use std::time::Duration;

/// Suspends for the configured delay. Zero still yields to the executor once
/// so callers never observe synchronous completion.
pub(crate) async fn simulate_latency(delay: Duration) {
    if delay.is_zero() {
        core_async::task::yield_now().await;
    } else {
        core_async::sleep(delay).await;
    }
}

/// Rejects seed collections whose ids repeat.
pub(crate) fn ensure_unique_ids<'a>(
    entity: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::InvalidSeed {
                entity: entity.to_string(),
                message: format!("duplicate id '{}'", id),
            });
        }
    }
    Ok(())
}
