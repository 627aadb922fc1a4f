//! Validation rules for the task draft.
//!
//! Only the title gates task submission; the rule runs synchronously at
//! submit time, before any async work, and never on keystrokes.

use super::TaskDraft;
use crate::submission::error::ValidationError;

/// Validates that the draft title is non-empty.
///
/// # Errors
///
/// Returns a `title`/`required` violation when the title is empty.
pub(crate) fn validate_title(draft: &TaskDraft) -> Result<(), ValidationError> {
    if draft.title().is_empty() {
        return Err(ValidationError::required("title"));
    }
    Ok(())
}
