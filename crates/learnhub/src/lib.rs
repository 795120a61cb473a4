//! `learnhub` - data layer and demo API for a learning showcase site
//!
//! This library provides the course catalog, the documentation index, the
//! demo user resource and the feedback collector, plus the axum HTTP API
//! that exposes them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod server;
pub mod storage;
pub mod users;

pub use catalog::{AccessMode, CatalogService, Course, CourseView, Level};
pub use config::Config;
pub use docs::{get_doc_meta, DocMeta, DocsIndex};
pub use error::{Error, Result};
pub use feedback::{Feedback, FeedbackCollector};
pub use logging::init_logging;
pub use users::{User, UserService};
