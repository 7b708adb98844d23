use domain_planner::{projects, tasks, users};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "API for managing users, projects and their tasks"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = users::handlers::ApiDoc),
        (path = "/projects", api = projects::handlers::ApiDoc),
        (path = "/projects", api = tasks::handlers::ProjectTasksApiDoc),
        (path = "/tasks", api = tasks::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/users",
            "/users/{id}",
            "/projects",
            "/projects/{id}",
            "/projects/{id}/tasks",
            "/tasks",
            "/tasks/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
