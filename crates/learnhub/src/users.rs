//! Demo user resource.
//!
//! Backs `GET /api/users` (list with optional substring filter) and
//! `POST /api/users` (create with validation).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::storage::{InMemoryUserRepository, UserRepository};

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the repository.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

impl User {
    /// Create a user record.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check whether `query` occurs in the name or the email (case-sensitive).
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.email.contains(query)
    }
}

/// The users every fresh store starts with.
#[must_use]
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "张三", "zhangsan@example.com"),
        User::new(2, "李四", "lisi@example.com"),
        User::new(3, "王五", "wangwu@example.com"),
    ]
}

/// Body accepted by `create`.
///
/// Both fields are optional at the parse stage so a missing field is a
/// validation failure rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    /// Requested display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Requested contact address.
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUser {
    /// Parse a raw JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRequest`] if the body is not a JSON object
    /// with string (or absent) `name` and `email` fields.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| Error::malformed(e.to_string()))
    }

    fn into_fields(self) -> Result<(String, String)> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Ok((name, email))
            }
            _ => Err(Error::validation("name and email are required")),
        }
    }
}

/// Operations on the user resource.
#[derive(Debug, Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service over the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Create a service over a fresh in-memory store holding the demo users.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::with_users(default_users())))
    }

    /// List users, optionally keeping only those matching `query`.
    ///
    /// An absent or empty query returns every user.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<User>> {
        let users = self.repo.list().await?;

        match query.filter(|q| !q.is_empty()) {
            Some(query) => {
                let filtered: Vec<User> = users.into_iter().filter(|u| u.matches(query)).collect();
                debug!("User query {:?} matched {} records", query, filtered.len());
                Ok(filtered)
            }
            None => Ok(users),
        }
    }

    /// Parse, validate and store a new user from a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRequest`] for an unparseable body and
    /// [`Error::Validation`] when `name` or `email` is missing or empty.
    /// Nothing is stored in either case.
    pub async fn create(&self, body: &[u8]) -> Result<User> {
        let request = CreateUser::from_slice(body)?;
        self.create_from(request).await
    }

    /// Validate and store an already-parsed request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `name` or `email` is missing or empty.
    pub async fn create_from(&self, request: CreateUser) -> Result<User> {
        let (name, email) = request.into_fields()?;
        let user = self.repo.insert(name, email).await?;
        info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Number of stored users.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn count(&self) -> Result<usize> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_in_order() {
        let service = UserService::seeded();
        let users = service.list(None).await.unwrap();

        assert_eq!(users, default_users());
    }

    #[tokio::test]
    async fn test_list_with_query() {
        let service = UserService::seeded();
        let users = service.list(Some("zhang")).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "zhangsan@example.com");
    }

    #[tokio::test]
    async fn test_list_matches_name() {
        let service = UserService::seeded();
        let users = service.list(Some("李")).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 2);
    }

    #[tokio::test]
    async fn test_list_query_is_case_sensitive() {
        let service = UserService::seeded();
        assert!(service.list(Some("ZHANG")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_empty_query_returns_all() {
        let service = UserService::seeded();
        assert_eq!(service.list(Some("")).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_is_idempotent() {
        let service = UserService::seeded();
        let first = service.list(None).await.unwrap();
        let second = service.list(None).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let service = UserService::seeded();
        let before = service.count().await.unwrap();

        let user = service
            .create(br#"{"name":"A","email":"a@b.com"}"#)
            .await
            .unwrap();

        assert_eq!(user.id as usize, before + 1);
        assert_eq!(user.name, "A");
        assert_eq!(service.count().await.unwrap(), before + 1);
    }

    #[tokio::test]
    async fn test_create_empty_object_is_validation_error() {
        let service = UserService::seeded();

        let err = service.create(b"{}").await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(service.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_empty_field_is_validation_error() {
        let service = UserService::seeded();

        let err = service
            .create(br#"{"name":"","email":"a@b.com"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_malformed_body() {
        let service = UserService::seeded();

        let err = service.create(b"not json").await.unwrap_err();
        assert!(matches!(err, Error::MalformedRequest { .. }));

        let err = service.create(br#"{"name": 5}"#).await.unwrap_err();
        assert!(matches!(err, Error::MalformedRequest { .. }));

        assert_eq!(service.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_seeded_scenario() {
        let service = UserService::seeded();

        let user = service
            .create(br#"{"name":"Zhao","email":"zhao@x.com"}"#)
            .await
            .unwrap();

        assert_eq!(user, User::new(4, "Zhao", "zhao@x.com"));
        assert_eq!(service.list(None).await.unwrap().len(), 4);
    }

    #[test]
    fn test_user_matches() {
        let user = User::new(1, "张三", "zhangsan@example.com");
        assert!(user.matches("张"));
        assert!(user.matches("example"));
        assert!(!user.matches("lisi"));
    }
}
