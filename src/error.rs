//! Roster errors and their HTTP shape.
//!
//! Every variant is a client-input error. `NotFound` maps to 404, the rest
//! to 400, always with a `{"detail": ...}` body.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorDetail;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,
    #[error("{email} is already signed up")]
    AlreadyRegistered { email: String },
    #[error("{email} is not registered")]
    NotRegistered { email: String },
    #[error("Activity is full")]
    ActivityFull,
    /// Malformed or missing query string, e.g. no `email`
    #[error("{0}")]
    InvalidQuery(String),
}

pub type RosterResult<T> = Result<T, RosterError>;

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::NotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadyRegistered { .. }
            | RosterError::NotRegistered { .. }
            | RosterError::ActivityFull
            | RosterError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "rejected roster request");
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
