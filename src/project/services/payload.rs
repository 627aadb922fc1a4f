//! Wire payload for project creation.

use crate::project::domain::ProjectDraft;
use serde::Serialize;

/// The exact JSON body posted to `POST /projects`.
///
/// The draft fields travel verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPayload {
    title: String,
    description: String,
}

impl From<&ProjectDraft> for ProjectPayload {
    fn from(draft: &ProjectDraft) -> Self {
        Self {
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
        }
    }
}
