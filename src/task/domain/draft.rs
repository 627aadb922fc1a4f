//! In-memory draft of a task being created.

use super::{Label, Priority, Status};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// The editable state behind the "create task" view.
///
/// Every field always holds a valid default or user value; there is no
/// partial state. Only the title gates submission, everything else may be
/// left at its default. The draft is ephemeral: it exists for the lifetime
/// of the creation view and is reset atomically after a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    title: String,
    description: String,
    priority: Priority,
    status: Status,
    label: Label,
    assignee: String,
    due_date: String,
    start_date: DateTime<Utc>,
}

impl TaskDraft {
    /// Creates a draft with all fields at their defaults.
    ///
    /// The start date is stamped from the clock, mirroring the view
    /// defaulting it to "now" on mount.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::default(),
            status: Status::default(),
            label: Label::default(),
            assignee: String::new(),
            due_date: String::new(),
            start_date: clock.utc(),
        }
    }

    /// Task title; the sole field required for submission.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Markdown description body.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Selected priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Selected workflow status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Selected label.
    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.label
    }

    /// Assignee handle; never transmitted in the create payload.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Due date as entered, empty when unset.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Start date, defaulted to draft-creation time.
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Replaces the status.
    pub const fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Replaces the label.
    pub fn set_label(&mut self, label: Label) {
        self.label = label;
    }

    /// Replaces the assignee.
    pub fn set_assignee(&mut self, assignee: impl Into<String>) {
        self.assignee = assignee.into();
    }

    /// Replaces the due date.
    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.due_date = due_date.into();
    }

    /// Replaces the start date.
    pub const fn set_start_date(&mut self, start_date: DateTime<Utc>) {
        self.start_date = start_date;
    }

    /// Restores every field to its default, re-stamping the start date.
    pub fn reset(&mut self, clock: &impl Clock) {
        *self = Self::new(clock);
    }
}
