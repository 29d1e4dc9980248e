use serde::Serialize;
use std::fmt;

pub const NOT_AUTHENTICATED: &str = "You must be signed in to perform this action.";
pub const INVALID_FORM: &str = "Please fill in all fields correctly.";
pub const UPDATE_SUCCEEDED: &str = "Movie updated successfully!";
pub const UPDATE_FAILED: &str = "An error occurred while updating the movie.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
}

/// Status line shown inside the form. Replaced wholesale on every outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineNotification {
    pub show: bool,
    #[serde(rename = "type")]
    pub kind: Option<NotificationKind>,
    pub text: String,
}

impl InlineNotification {
    pub fn error(text: &str) -> Self {
        Self {
            show: true,
            kind: Some(NotificationKind::Error),
            text: text.to_string(),
        }
    }

    pub fn success(text: &str) -> Self {
        Self {
            show: true,
            kind: Some(NotificationKind::Success),
            text: text.to_string(),
        }
    }
}

impl fmt::Display for InlineNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(NotificationKind::Error) => write!(f, "✗ {}", self.text),
            Some(NotificationKind::Success) => write!(f, "✓ {}", self.text),
            None => Ok(()),
        }
    }
}
