//! Activity API handlers.
//!
//! Thin translation between HTTP and the registry: every rule about who may
//! sign up or leave lives in `mergington_registry`.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use mergington_registry::ActivityListing;

use crate::error::ApiError;
use crate::state::AppState;

/// Landing page of the bundled front-end.
pub const INDEX_PATH: &str = "/static/index.html";

/// Query string carrying the student's email.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation returned by a successful signup or unregister.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    query
        .map(|Query(q)| q.email)
        .map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))
}

/// Redirect to the front-end.
///
/// GET /
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// List every activity with its participants.
///
/// GET /activities
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityListing> {
    state.increment_requests();
    let listing = state.registry.list_activities();
    debug!("Listing {} activities", listing.len());
    Json(listing)
}

/// Sign a student up for an activity.
///
/// POST /activities/{activity_name}/signup?email=...
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.increment_requests();
    let email = email_from(query)?;
    let message = state.registry.signup(&activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}

/// Remove a student from an activity.
///
/// POST /activities/{activity_name}/unregister?email=...
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.increment_requests();
    let email = email_from(query)?;
    let message = state.registry.unregister(&activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
