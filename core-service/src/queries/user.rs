//! User queries

use crate::error::Result;
use crate::queries::{is_blank, require_id};
use core_data::{User, UserRepository};
use std::sync::Arc;
use tracing::debug;

/// Lists and searches users.
#[derive(Clone)]
pub struct GetUsersQuery {
    repository: Arc<dyn UserRepository>,
}

impl GetUsersQuery {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// All users in provider order.
    pub async fn execute(&self) -> Result<Vec<User>> {
        Ok(self.repository.list().await?)
    }

    /// Users whose name contains `query`, ignoring case.
    ///
    /// A blank query is "no filter" and returns the full list.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<User>> {
        if is_blank(query) {
            debug!("Blank user search, listing all users");
            return self.execute().await;
        }
        Ok(self.repository.search_by_name(query).await?)
    }
}

/// Looks up a single user.
#[derive(Clone)]
pub struct GetUserByIdQuery {
    repository: Arc<dyn UserRepository>,
}

impl GetUserByIdQuery {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    /// [`CoreError::InvalidArgument`](crate::CoreError::InvalidArgument) when
    /// `user_id` is empty or whitespace; the provider is not called.
    pub async fn execute(&self, user_id: &str) -> Result<Option<User>> {
        require_id(user_id, "User ID cannot be blank")?;
        Ok(self.repository.find_by_id(user_id).await?)
    }
}
