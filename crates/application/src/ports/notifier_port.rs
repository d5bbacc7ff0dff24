//! User notification port
//!
//! Lookup results are surfaced to the user as short success or error
//! messages. How they are shown is up to the presentation layer.

use std::fmt;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;
use serde::Serialize;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    /// Build a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Build an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// Whether this is an error notification
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NotificationLevel::Error)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NotificationLevel::Success => write!(f, "✅ {}", self.message),
            NotificationLevel::Error => write!(f, "❌ {}", self.message),
        }
    }
}

/// Port for showing notifications to the user
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait NotifierPort: Send + Sync {
    /// Show a notification
    fn notify(&self, notification: &Notification);
}
