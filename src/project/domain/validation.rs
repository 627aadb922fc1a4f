//! Validation rules for the project draft.
//!
//! Each rule is a pure function over the draft. Rules are applied together
//! and their violations collected, so the user sees every offending field at
//! once rather than one per attempt. Validation runs on submit only.

use super::ProjectDraft;
use crate::submission::error::ValidationError;

/// Validates that the draft title is non-empty.
///
/// # Errors
///
/// Returns a `title`/`required` violation when the title is empty.
pub(crate) fn validate_title(draft: &ProjectDraft) -> Result<(), ValidationError> {
    if draft.title().is_empty() {
        return Err(ValidationError::required("title"));
    }
    Ok(())
}

/// Validates that the draft description is non-empty.
///
/// # Errors
///
/// Returns a `description`/`required` violation when the description is
/// empty.
pub(crate) fn validate_description(draft: &ProjectDraft) -> Result<(), ValidationError> {
    if draft.description().is_empty() {
        return Err(ValidationError::required("description"));
    }
    Ok(())
}

/// Applies every rule, collecting all violations.
pub(crate) fn validate(draft: &ProjectDraft) -> Vec<ValidationError> {
    [validate_title(draft), validate_description(draft)]
        .into_iter()
        .filter_map(Result::err)
        .collect()
}
