use serde::{Deserialize, Serialize};

/// An extracurricular activity and its current roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Insertion-ordered, never contains duplicates
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

/// Query string for signup / unregister
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// API Response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
