//! HTTP API for learnhub.
//!
//! Builds the axum router over a shared [`AppState`]. Every handler is a thin
//! adapter; the logic lives in the catalog, docs, users and feedback modules.

mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::CatalogService;
use crate::config::Config;
use crate::docs::DocsIndex;
use crate::feedback::FeedbackCollector;
use crate::storage::{InMemoryFeedbackRepository, InMemoryUserRepository};
use crate::users::{default_users, UserService};

pub use handlers::HelloResponse;

/// Services shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Course catalog.
    pub catalog: Arc<CatalogService>,
    /// Documentation index.
    pub docs: DocsIndex,
    /// User resource.
    pub users: UserService,
    /// Feedback collector.
    pub feedback: FeedbackCollector,
}

impl AppState {
    /// Build fresh in-memory state from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let seed = if config.users.seed_defaults {
            default_users()
        } else {
            Vec::new()
        };

        Self {
            catalog: Arc::new(CatalogService::new(config.catalog_latency())),
            docs: DocsIndex::builtin(),
            users: UserService::new(Arc::new(InMemoryUserRepository::with_users(seed))),
            feedback: FeedbackCollector::new(
                Arc::new(InMemoryFeedbackRepository::new()),
                config.feedback.anonymous_name.clone(),
            ),
        }
    }
}

/// Build the application router without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/courses", get(handlers::list_courses))
        .route("/api/docs", get(handlers::list_docs))
        .route("/api/docs/{slug}", get(handlers::get_doc))
        .route(
            "/api/feedback",
            get(handlers::list_feedback).post(handlers::submit_feedback),
        )
}

/// Build the full application with CORS and request tracing.
pub fn app(state: AppState, cors_max_age: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(cors_max_age);

    routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
