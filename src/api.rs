use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use chrono::Utc;
use std::collections::BTreeMap;

use crate::app::AppState;
use crate::error::{RosterError, RosterResult};
use crate::models::{Activity, EmailQuery, MessageResponse};

pub const INDEX_PAGE: &str = "/static/index.html";

/// Front-end entry page
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// List all activities with their rosters
pub async fn list_activities(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    Json(state.roster.list_activities().await)
}

pub async fn get_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> RosterResult<Json<Activity>> {
    state.roster.get_activity(&name).await.map(Json)
}

/// Sign a student up for an activity
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> RosterResult<Json<MessageResponse>> {
    let Query(query) = query.map_err(invalid_query)?;
    state.roster.join(&name, &query.email).await?;
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, name),
    }))
}

/// Remove a student from an activity
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> RosterResult<Json<MessageResponse>> {
    let Query(query) = query.map_err(invalid_query)?;
    state.roster.leave(&name, &query.email).await?;
    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, name),
    }))
}

fn invalid_query(rejection: QueryRejection) -> RosterError {
    RosterError::InvalidQuery(rejection.body_text())
}
