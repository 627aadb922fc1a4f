//! API path and client route builders.
//!
//! Paths are relative to the gateway's base URL; the client route is handed
//! to the navigation sink after a successful task creation. Both flows share
//! the `/projects` namespace.

/// API path for creating a project.
#[must_use]
pub const fn projects_path() -> &'static str {
    "/projects"
}

/// API path for creating a task under the given project.
#[must_use]
pub fn project_tasks_path(project_id: &str) -> String {
    format!("/projects/{project_id}/tasks")
}

/// Client-side route for a project's task list.
///
/// Happens to coincide with [`project_tasks_path`] today; kept separate
/// because the two are owned by different collaborators (the gateway and the
/// navigation sink).
#[must_use]
pub fn task_list_route(project_id: &str) -> String {
    format!("/projects/{project_id}/tasks")
}
