//! Feedback collector.
//!
//! Form submissions are prepended to an in-memory list. Each accepted
//! submission bumps a revision counter; views holding a receiver from
//! [`FeedbackCollector::subscribe`] re-read the list when it changes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::info;

use crate::error::{Error, Result};
use crate::storage::{FeedbackRepository, InMemoryFeedbackRepository};

/// Name recorded for submissions without one.
pub const ANONYMOUS: &str = "匿名";

/// A feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Who left the feedback.
    pub name: String,
    /// The feedback text.
    pub message: String,
    /// When it was submitted.
    pub created_at: DateTime<Utc>,
}

/// Form fields of a submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackForm {
    /// Optional submitter name.
    #[serde(default)]
    pub name: Option<String>,
    /// Feedback text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepts and lists feedback.
#[derive(Debug, Clone)]
pub struct FeedbackCollector {
    repo: Arc<dyn FeedbackRepository>,
    anonymous_name: String,
    revision: Arc<watch::Sender<u64>>,
}

impl FeedbackCollector {
    /// Create a collector over the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn FeedbackRepository>, anonymous_name: impl Into<String>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            repo,
            anonymous_name: anonymous_name.into(),
            revision: Arc::new(revision),
        }
    }

    /// Create a collector over a fresh, empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryFeedbackRepository::new()), ANONYMOUS)
    }

    /// Record a submission.
    ///
    /// An absent `name` is replaced by the anonymous name; an empty one is
    /// kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `message` is absent or empty; nothing
    /// is stored and the revision is unchanged.
    pub async fn submit(&self, name: Option<&str>, message: Option<&str>) -> Result<Feedback> {
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => return Err(Error::validation("feedback message is required")),
        };
        let name = name.unwrap_or(&self.anonymous_name).to_string();

        let feedback = Feedback {
            name,
            message,
            created_at: Utc::now(),
        };
        self.repo.prepend(feedback.clone()).await?;

        self.revision.send_modify(|rev| *rev += 1);
        info!("Recorded feedback from {}", feedback.name);
        Ok(feedback)
    }

    /// Record a parsed form submission.
    ///
    /// # Errors
    ///
    /// See [`FeedbackCollector::submit`].
    pub async fn submit_form(&self, form: &FeedbackForm) -> Result<Feedback> {
        self.submit(form.name.as_deref(), form.message.as_deref())
            .await
    }

    /// All entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn list(&self) -> Result<Vec<Feedback>> {
        self.repo.list().await
    }

    /// Watch the revision counter, bumped once per accepted submission.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Current revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }
}
