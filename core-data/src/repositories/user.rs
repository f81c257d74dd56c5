//! User provider trait and in-memory implementation

use crate::error::{DataError, Result};
use crate::models::User;
use crate::repositories::{ensure_unique_ids, simulate_latency};
use crate::seed;
use async_trait::async_trait;
use bridge_traits::platform::PlatformSendSync;
use core_runtime::config::LatencyConfig;
use tracing::debug;

/// User provider interface
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait UserRepository: PlatformSendSync {
    /// All users, in source order
    async fn list(&self) -> Result<Vec<User>>;

    /// Find a user by exact id
    ///
    /// # Returns
    /// - `Ok(Some(user))` if found
    /// - `Ok(None)` if not found
    /// - `Err` if the data source fails
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Users whose name contains `query`, ignoring case
    async fn search_by_name(&self, query: &str) -> Result<Vec<User>>;
}

/// Seeded, read-only user provider
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
    latency: LatencyConfig,
}

impl InMemoryUserRepository {
    /// Sample users with the default simulated latency
    pub fn new() -> Self {
        Self::with_latency(LatencyConfig::default())
    }

    /// Sample users with custom latency
    pub fn with_latency(latency: LatencyConfig) -> Self {
        Self {
            users: seed::sample_users(),
            latency,
        }
    }

    /// Custom users
    ///
    /// # Errors
    /// Returns [`DataError::InvalidSeed`] if a user fails validation or two
    /// users share an id.
    pub fn from_users(users: Vec<User>, latency: LatencyConfig) -> Result<Self> {
        for user in &users {
            user.validate().map_err(|message| DataError::InvalidSeed {
                entity: "User".to_string(),
                message,
            })?;
        }
        ensure_unique_ids("User", users.iter().map(|u| u.id.as_str()))?;
        Ok(Self { users, latency })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        simulate_latency(self.latency.list_users).await;
        Ok(self.users.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        simulate_latency(self.latency.find_user).await;
        let user = self.users.iter().find(|u| u.id == id).cloned();
        debug!(user_id = id, found = user.is_some(), "User lookup");
        Ok(user)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<User>> {
        simulate_latency(self.latency.search_users).await;
        let matches: Vec<User> = self
            .users
            .iter()
            .filter(|u| u.name_matches(query))
            .cloned()
            .collect();
        debug!(query, matches = matches.len(), "User search");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::with_latency(LatencyConfig::disabled())
    }

    fn ids(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    #[core_async::test]
    async fn test_list_preserves_seed_order() {
        let users = repo().list().await.unwrap();
        assert_eq!(ids(&users), vec!["1", "2", "3", "4", "5"]);
    }

    #[core_async::test]
    async fn test_list_is_idempotent() {
        let repo = repo();
        let first = repo.list().await.unwrap();
        let second = repo.list().await.unwrap();
        assert_eq!(first, second);
    }

    #[core_async::test]
    async fn test_find_by_id() {
        let repo = repo();

        let user = repo.find_by_id("2").await.unwrap().unwrap();
        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.email, "jane.smith@example.com");

        assert!(repo.find_by_id("does-not-exist").await.unwrap().is_none());
    }

    #[core_async::test]
    async fn test_find_by_id_is_exact_match() {
        // Providers do not trim or normalize ids.
        assert!(repo().find_by_id(" 1").await.unwrap().is_none());
    }

    #[core_async::test]
    async fn test_search_by_name_ignores_case() {
        let repo = repo();

        let does = repo.search_by_name("doe").await.unwrap();
        assert_eq!(ids(&does), vec!["1"]);

        let johns = repo.search_by_name("JOHN").await.unwrap();
        assert_eq!(ids(&johns), vec!["1", "3"]);

        assert!(repo.search_by_name("zelda").await.unwrap().is_empty());
    }

    #[core_async::test]
    async fn test_search_with_empty_query_matches_everything() {
        // The empty-query policy lives in the query layer; the provider just
        // does substring matching.
        let users = repo().search_by_name("").await.unwrap();
        assert_eq!(users.len(), 5);
    }

    #[test]
    fn test_from_users_rejects_duplicates() {
        let result = InMemoryUserRepository::from_users(
            vec![
                User::new("1", "A", "a@example.com"),
                User::new("1", "B", "b@example.com"),
            ],
            LatencyConfig::disabled(),
        );

        assert!(matches!(
            result,
            Err(DataError::InvalidSeed { ref message, .. }) if message.contains("duplicate id '1'")
        ));
    }

    #[test]
    fn test_from_users_rejects_blank_id() {
        let result = InMemoryUserRepository::from_users(
            vec![User::new("", "A", "a@example.com")],
            LatencyConfig::disabled(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_uses_sample_data() {
        let repo = InMemoryUserRepository::default();
        assert_eq!(repo.len(), 5);
        assert!(!repo.is_empty());
    }
}
