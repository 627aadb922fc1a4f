//! Wire payload for task creation.

use crate::task::domain::{Priority, Status, TaskDraft};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The exact JSON body posted to `POST /projects/<id>/tasks`.
///
/// Projected from a draft snapshot taken when the gateway call starts. The
/// label travels by name only; its id and colour stay client-side, and the
/// assignee is not part of the create payload at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    title: String,
    priority: Priority,
    status: Status,
    label: String,
    description: String,
    start_date: DateTime<Utc>,
    due_date: String,
}

impl From<&TaskDraft> for TaskPayload {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title().to_owned(),
            priority: draft.priority(),
            status: draft.status(),
            label: draft.label().name.clone(),
            description: draft.description().to_owned(),
            start_date: draft.start_date(),
            due_date: draft.due_date().to_owned(),
        }
    }
}
