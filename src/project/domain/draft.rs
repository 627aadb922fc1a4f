//! In-memory draft of a project being created.

/// The editable state behind the "create project" view.
///
/// Both fields are required for submission. Like the task draft, it is
/// ephemeral and resets after a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDraft {
    title: String,
    description: String,
}

impl ProjectDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Restores both fields to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
