//! In-memory activity roster.
//!
//! All signup state lives here and is lost on restart. Mutations take the
//! write lock, so concurrent join/leave on the same activity serialize and
//! never lose updates.
use std::collections::BTreeMap;
use std::str::FromStr;

use tokio::sync::RwLock;

use crate::error::{RosterError, RosterResult};
use crate::models::Activity;
use crate::seed::seed_activities;

/// Whether `max_participants` is checked on join
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Capacity is recorded but never checked
    #[default]
    Unbounded,
    /// Join fails with `ActivityFull` once the roster reaches capacity
    Enforced,
}

impl FromStr for CapacityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbounded" => Ok(CapacityPolicy::Unbounded),
            "enforced" => Ok(CapacityPolicy::Enforced),
            other => Err(format!("unknown capacity policy `{other}`")),
        }
    }
}

#[derive(Debug)]
pub struct RosterStore {
    activities: RwLock<BTreeMap<String, Activity>>,
    capacity: CapacityPolicy,
}

impl RosterStore {
    pub fn new(activities: BTreeMap<String, Activity>, capacity: CapacityPolicy) -> Self {
        Self {
            activities: RwLock::new(activities),
            capacity,
        }
    }

    /// Store holding the seed activities
    pub fn seeded(capacity: CapacityPolicy) -> Self {
        Self::new(seed_activities(), capacity)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity
    }

    pub async fn list_activities(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    pub async fn get_activity(&self, name: &str) -> RosterResult<Activity> {
        self.activities
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(RosterError::NotFound)
    }

    /// Add `email` to the activity's participants.
    ///
    /// # Errors
    /// - `NotFound` when the activity does not exist.
    /// - `AlreadyRegistered` when the email is already on the roster.
    /// - `ActivityFull` when capacity is enforced and the roster is full.
    pub async fn join(&self, name: &str, email: &str) -> RosterResult<()> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(RosterError::NotFound)?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadyRegistered {
                email: email.to_string(),
            });
        }
        if self.capacity == CapacityPolicy::Enforced && activity.is_full() {
            return Err(RosterError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = name,
            email,
            participants = activity.participants.len(),
            "participant joined"
        );
        Ok(())
    }

    /// Remove `email` from the activity's participants.
    ///
    /// # Errors
    /// - `NotFound` when the activity does not exist.
    /// - `NotRegistered` when the email is not on the roster.
    pub async fn leave(&self, name: &str, email: &str) -> RosterResult<()> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(RosterError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::NotRegistered {
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::info!(
            activity = name,
            email,
            participants = activity.participants.len(),
            "participant left"
        );
        Ok(())
    }

    /// Replace the whole roster with the seed activities
    pub async fn reset(&self) {
        *self.activities.write().await = seed_activities();
        tracing::debug!("roster reset to seed");
    }
}
