use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{CreateProject, Project, ProjectStatus, UpdateProject};
use super::repository::ProjectRepository;
use super::service::ProjectService;
use crate::error::PlannerResult;
use crate::models::DeleteResponse;
use crate::tasks::TaskRepository;

/// OpenAPI documentation for Projects API
#[derive(OpenApi)]
#[openapi(
    paths(list_projects, create_project, get_project, update_project, delete_project),
    components(
        schemas(Project, ProjectStatus, CreateProject, UpdateProject, DeleteResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "projects", description = "Project management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<P, T> = Arc<ProjectService<P, T>>;

/// Create the project router with all HTTP endpoints
pub fn router<P, T>(service: ProjectService<P, T>) -> Router
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{id}",
            get(get_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .with_state(shared_service)
}

/// List all projects
#[utoipa::path(
    get,
    path = "",
    tag = "projects",
    responses(
        (status = 200, description = "All projects ordered by id", body = Vec<Project>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_projects<P: ProjectRepository, T: TaskRepository>(
    State(service): State<SharedService<P, T>>,
) -> PlannerResult<Json<Vec<Project>>> {
    let projects = service.list_projects().await?;
    Ok(Json(projects))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = "projects",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created successfully", body = Project),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_project<P: ProjectRepository, T: TaskRepository>(
    State(service): State<SharedService<P, T>>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> PlannerResult<impl IntoResponse> {
    let project = service.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "projects",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "The project, or null when no project has this id", body = Option<Project>),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project<P: ProjectRepository, T: TaskRepository>(
    State(service): State<SharedService<P, T>>,
    IdPath(id): IdPath,
) -> PlannerResult<Json<Option<Project>>> {
    let project = service.get_project(id).await?;
    Ok(Json(project))
}

/// Update a project
///
/// Only keys present in the body change; `null` clears description or dates.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "projects",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated successfully", body = Project),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_project<P: ProjectRepository, T: TaskRepository>(
    State(service): State<SharedService<P, T>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> PlannerResult<Json<Project>> {
    let project = service.update_project(id, input).await?;
    Ok(Json(project))
}

/// Delete a project and all of its tasks
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "projects",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted successfully", body = DeleteResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_project<P: ProjectRepository, T: TaskRepository>(
    State(service): State<SharedService<P, T>>,
    IdPath(id): IdPath,
) -> PlannerResult<Json<DeleteResponse>> {
    service.delete_project(id).await?;
    Ok(Json(DeleteResponse::ok()))
}
