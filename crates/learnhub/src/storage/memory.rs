//! In-memory repositories.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{FeedbackRepository, UserRepository};
use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::users::User;

/// User repository backed by a `Vec` behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `users` as-is.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn insert(&self, name: String, email: String) -> Result<User> {
        // Length read and push happen under one write guard
        let mut users = self.users.write().await;
        let next = users.len() + 1;
        let id = u32::try_from(next)
            .map_err(|_| Error::internal(format!("user id {next} out of range")))?;

        let user = User { id, name, email };
        users.push(user.clone());
        debug!("Inserted user with id {}", id);
        Ok(user)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.users.read().await.len())
    }
}

/// Feedback repository backed by a `VecDeque`, newest entry at the front.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackRepository {
    entries: RwLock<VecDeque<Feedback>>,
}

impl InMemoryFeedbackRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn list(&self) -> Result<Vec<Feedback>> {
        Ok(self.entries.read().await.iter().cloned().collect())
    }

    async fn prepend(&self, feedback: Feedback) -> Result<()> {
        self.entries.write().await.push_front(feedback);
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }
}
