//! Notifications
//!
//! Queued, user-facing messages. Auto-dismiss timing is driven by the
//! hosting runtime, not by the store.

use crate::constants::DEFAULT_NOTIFICATION_DURATION;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Notification identity, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

/// Severity/kind of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Error => "ERROR",
            NotificationKind::Warning => "WARNING",
            NotificationKind::Info => "INFO",
        }
    }
}

/// Button attached to a notification
#[derive(Clone)]
pub struct NotificationAction {
    pub label: String,
    handler: Rc<dyn Fn()>,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, handler: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Rc::new(handler),
        }
    }

    /// Run the action's handler
    pub fn invoke(&self) {
        (self.handler)();
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Notification request, before the store assigns an identity
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub message: String,
    pub title: Option<String>,
    pub duration: Option<Duration>,
    pub action: Option<NotificationAction>,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            title: None,
            duration: None,
            action: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Override the auto-dismiss delay; `Duration::ZERO` keeps it until dismissed
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn action(mut self, label: impl Into<String>, handler: impl Fn() + 'static) -> Self {
        self.action = Some(NotificationAction::new(label, handler));
        self
    }
}

/// A queued notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub title: Option<String>,
    pub duration: Duration,
    pub action: Option<NotificationAction>,
    pub created_at: DateTime<Local>,
}

impl Notification {
    pub(crate) fn from_request(id: NotificationId, request: NewNotification) -> Self {
        Self {
            id,
            kind: request.kind,
            message: request.message,
            title: request.title,
            duration: request.duration.unwrap_or(DEFAULT_NOTIFICATION_DURATION),
            action: request.action,
            created_at: Local::now(),
        }
    }

    /// Creation time as shown next to the notification
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }

    /// Whether the runtime should schedule an auto-dismiss
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (!self.duration.is_zero()).then_some(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;

    #[test]
    fn default_duration_is_applied() {
        let n = Notification::from_request(NotificationId(1), NewNotification::info("Saved"));
        assert_eq!(n.duration, Duration::from_millis(5000));
        assert_eq!(n.auto_dismiss(), Some(Duration::from_millis(5000)));
    }

    #[test]
    fn time_label_shows_creation_time() {
        let mut n = Notification::from_request(NotificationId(4), NewNotification::info("Queued"));
        let before = Local::now();
        assert!(n.created_at <= before);

        n.created_at = Local
            .with_ymd_and_hms(2026, 3, 1, 14, 5, 9)
            .single()
            .expect("unambiguous local time");
        assert_eq!(n.time_label(), "14:05:09");
    }

    #[test]
    fn zero_duration_is_sticky() {
        let request = NewNotification::error("Upload failed").duration(Duration::ZERO);
        let n = Notification::from_request(NotificationId(2), request);
        assert_eq!(n.auto_dismiss(), None);
    }

    #[test]
    fn action_handler_runs() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let request = NewNotification::warning("Post scheduled during prayer time")
            .title("Heads up")
            .action("Reschedule", move || counter.set(counter.get() + 1));

        let n = Notification::from_request(NotificationId(3), request);
        let action = n.action.as_ref().expect("action");
        assert_eq!(action.label, "Reschedule");
        action.invoke();
        action.invoke();
        assert_eq!(clicks.get(), 2);
        assert_eq!(n.title.as_deref(), Some("Heads up"));
    }
}
