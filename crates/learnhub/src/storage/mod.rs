//! Storage layer for learnhub.
//!
//! Users and feedback live behind repository traits so the HTTP layer and
//! the tests can each hold their own isolated store. The only backend is
//! in-memory; nothing survives a restart.

pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::feedback::Feedback;
use crate::users::User;

pub use memory::{InMemoryFeedbackRepository, InMemoryUserRepository};

/// Storage for user records.
///
/// Implementations assign ids themselves so two concurrent inserts can
/// never receive the same id.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// All users, in insertion order.
    async fn list(&self) -> Result<Vec<User>>;

    /// Append a user, assigning `id = current count + 1`.
    async fn insert(&self, name: String, email: String) -> Result<User>;

    /// Number of stored users.
    async fn count(&self) -> Result<usize>;
}

/// Storage for feedback entries.
#[async_trait]
pub trait FeedbackRepository: Send + Sync + std::fmt::Debug + 'static {
    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<Feedback>>;

    /// Store an entry in front of all existing ones.
    async fn prepend(&self, feedback: Feedback) -> Result<()>;

    /// Number of stored entries.
    async fn count(&self) -> Result<usize>;
}
