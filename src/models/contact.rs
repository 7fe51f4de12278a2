use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor message from the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            name,
            email,
            subject,
            message,
            submitted_at: Utc::now(),
        }
    }

    /// Mirrors the form's submit-enable check: name, email, and message
    /// must all be present.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}
