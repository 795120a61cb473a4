//! Course catalog.
//!
//! The catalog is a fixed list of courses built at startup. Callers read it
//! through [`CatalogService`], which tags every record with the access mode
//! the caller asked for and waits a simulated network latency first.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Beginner.
    #[serde(rename = "入门")]
    Beginner,
    /// Intermediate.
    #[serde(rename = "进阶")]
    Intermediate,
    /// Advanced.
    #[serde(rename = "高级")]
    Advanced,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "入门"),
            Self::Intermediate => write!(f, "进阶"),
            Self::Advanced => write!(f, "高级"),
        }
    }
}

/// How a page would fetch its data.
///
/// This is a label only: the catalog behaves the same for every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    /// Static generation at build time.
    #[serde(rename = "SSG", alias = "ssg")]
    Ssg,
    /// Rendered on every request.
    #[default]
    #[serde(rename = "SSR", alias = "ssr")]
    Ssr,
    /// Static, regenerated in the background.
    #[serde(rename = "ISR", alias = "isr")]
    Isr,
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ssg => write!(f, "SSG"),
            Self::Ssr => write!(f, "SSR"),
            Self::Isr => write!(f, "ISR"),
        }
    }
}

impl FromStr for AccessMode {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SSG" => Ok(Self::Ssg),
            "SSR" => Ok(Self::Ssr),
            "ISR" => Ok(Self::Isr),
            _ => Err(crate::error::Error::validation(format!(
                "unknown access mode '{s}', expected SSG, SSR or ISR"
            ))),
        }
    }
}

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier.
    pub id: u32,
    /// Course title.
    pub title: &'static str,
    /// Difficulty level.
    pub level: Level,
    /// Data-fetching technique the course is about.
    #[serde(rename = "type")]
    pub kind: AccessMode,
    /// Human-readable running time.
    pub duration: &'static str,
    /// Last update, as `YYYY-MM-DD`.
    pub updated_at: &'static str,
}

/// A course as returned to a caller, tagged with the requested mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseView {
    /// The underlying record.
    #[serde(flatten)]
    pub course: Course,
    /// The mode the caller asked for.
    pub mode: AccessMode,
}

const COURSES: [Course; 3] = [
    Course {
        id: 1,
        title: "App Router 基础",
        level: Level::Beginner,
        kind: AccessMode::Ssg,
        duration: "30 min",
        updated_at: "2024-03-01",
    },
    Course {
        id: 2,
        title: "数据获取模式",
        level: Level::Intermediate,
        kind: AccessMode::Ssr,
        duration: "45 min",
        updated_at: "2024-05-12",
    },
    Course {
        id: 3,
        title: "Server Actions 实战",
        level: Level::Advanced,
        kind: AccessMode::Isr,
        duration: "60 min",
        updated_at: "2024-06-18",
    },
];

/// The built-in course list, ids ascending.
#[must_use]
pub fn courses() -> &'static [Course] {
    &COURSES
}

/// Read access to the course catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    courses: &'static [Course],
    latency: Duration,
}

impl CatalogService {
    /// Create a service over the built-in catalog.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            courses: courses(),
            latency,
        }
    }

    /// The simulated latency applied to every read.
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Return every course tagged with `mode`, in catalog order.
    ///
    /// The stored records are never modified; each call builds fresh views.
    pub async fn get_courses(&self, mode: AccessMode) -> Vec<CourseView> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        debug!("Serving {} courses in {mode} mode", self.courses.len());
        self.courses
            .iter()
            .map(|course| CourseView {
                course: course.clone(),
                mode,
            })
            .collect()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
