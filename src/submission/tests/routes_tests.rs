//! Tests for API path and client route builders.

use crate::submission::domain::routes;

#[test]
fn projects_path_is_fixed() {
    assert_eq!(routes::projects_path(), "/projects");
}

#[test]
fn project_tasks_path_embeds_project_id() {
    assert_eq!(
        routes::project_tasks_path("proj-42"),
        "/projects/proj-42/tasks"
    );
}

#[test]
fn task_list_route_matches_creation_path_shape() {
    let route = routes::task_list_route("64f0c2");
    assert_eq!(route, "/projects/64f0c2/tasks");
    assert_eq!(route, routes::project_tasks_path("64f0c2"));
}
