//! Tests for project draft validation.

use crate::project::domain::{validation, ProjectDraft};
use crate::submission::error::ValidationError;
use rstest::rstest;

#[test]
fn empty_draft_reports_both_fields_together() {
    let draft = ProjectDraft::new();
    let violations = validation::validate(&draft);
    assert_eq!(
        violations,
        vec![
            ValidationError::required("title"),
            ValidationError::required("description"),
        ]
    );
}

#[rstest]
#[case("", "a description", "title")]
#[case("a title", "", "description")]
fn single_missing_field_is_the_only_violation(
    #[case] title: &str,
    #[case] description: &str,
    #[case] field: &'static str,
) {
    let mut draft = ProjectDraft::new();
    draft.set_title(title);
    draft.set_description(description);

    let violations = validation::validate(&draft);
    assert_eq!(violations, vec![ValidationError::required(field)]);
}

#[test]
fn complete_draft_passes() {
    let mut draft = ProjectDraft::new();
    draft.set_title("Apollo");
    draft.set_description("Mission tracker");
    assert!(validation::validate(&draft).is_empty());
}
