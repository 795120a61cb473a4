use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::catalog::AccessMode;
use crate::error::{Error, Result};
use crate::feedback::FeedbackForm;

/// Body of `GET /api/hello`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    /// Greeting text.
    pub message: String,
    /// Server time, RFC 3339 with milliseconds.
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct UsersQuery {
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CoursesQuery {
    mode: Option<String>,
}

pub(super) async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "欢迎使用 learnhub API".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub(super) async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Result<impl IntoResponse> {
    let users = state.users.list(query.q.as_deref()).await?;
    Ok(Json(users))
}

// Parse failures must surface as MalformedRequest, so take the raw body
pub(super) async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let user = state.users.create(&body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub(super) async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CoursesQuery>,
) -> Result<impl IntoResponse> {
    let mode = match query.mode.as_deref() {
        Some(raw) => raw.parse::<AccessMode>()?,
        None => AccessMode::default(),
    };
    Ok(Json(state.catalog.get_courses(mode).await))
}

pub(super) async fn list_docs(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.docs.all())
}

pub(super) async fn get_doc(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    state
        .docs
        .get(&slug)
        .map(Json)
        .ok_or_else(|| Error::not_found("doc", slug))
}

pub(super) async fn list_feedback(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.feedback.list().await?))
}

pub(super) async fn submit_feedback(
    State(state): State<AppState>,
    form: std::result::Result<Form<FeedbackForm>, FormRejection>,
) -> Result<impl IntoResponse> {
    let Form(form) = form.map_err(|rejection| Error::malformed(rejection.body_text()))?;
    let entry = state.feedback.submit_form(&form).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
