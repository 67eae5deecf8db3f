//! Mergington High School activity signup service.
//!
//! An in-memory roster of extracurricular activities behind a small HTTP API:
//! list activities, sign a student up, unregister a student.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod roster;
pub mod seed;


pub use app::{build_router, AppState};
pub use error::{RosterError, RosterResult};
pub use models::Activity;
pub use roster::{CapacityPolicy, RosterStore};
