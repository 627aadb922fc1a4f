//! Notification sink port.

use serde::{Deserialize, Serialize};

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Confirmation toast, e.g. after a successful create.
    Info,
    /// Pre-submission warning, e.g. a missing required title.
    Warning,
    /// Submission failure report.
    Error,
}

/// User-visible toast sink.
pub trait Notifier: Send + Sync {
    /// Shows a toast with the given message, title, and severity.
    fn notify(&self, message: &str, title: &str, kind: NotificationKind);
}
