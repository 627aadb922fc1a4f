//! Current-project context for the task flow.

/// The project a new task is created under.
///
/// Passed explicitly rather than read from ambient application state, so the
/// dependency stays visible and testable in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    project_id: String,
}

impl ProjectContext {
    /// Creates a context for the given project identifier.
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    /// The owning project's identifier.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}
