//! Router wiring and the state injected into handlers.
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::roster::RosterStore;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
}

impl AppState {
    pub fn new(roster: RosterStore) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health_check))
        .route("/activities", get(api::list_activities))
        .route("/activities/:name", get(api::get_activity))
        .route("/activities/:name/signup", post(api::signup))
        .route("/activities/:name/unregister", delete(api::unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
