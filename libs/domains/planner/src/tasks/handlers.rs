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

use super::models::{CreateTask, Task, TaskPriority, TaskStatus, UpdateTask};
use super::repository::TaskRepository;
use super::service::TaskService;
use crate::error::PlannerResult;
use crate::models::DeleteResponse;
use crate::projects::ProjectRepository;
use crate::users::UserRepository;

/// OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(
        schemas(Task, TaskStatus, TaskPriority, CreateTask, UpdateTask, DeleteResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the tasks-of-a-project route, nested under `/projects`
#[derive(OpenApi)]
#[openapi(
    paths(list_project_tasks),
    components(schemas(Task)),
    tags(
        (name = "projects", description = "Project management endpoints")
    )
)]
pub struct ProjectTasksApiDoc;

type SharedService<T, P, U> = Arc<TaskService<T, P, U>>;

/// Create the task router with all HTTP endpoints
pub fn router<T, P, U>(service: TaskService<T, P, U>) -> Router
where
    T: TaskRepository + 'static,
    P: ProjectRepository + 'static,
    U: UserRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .with_state(shared_service)
}

/// Router for `GET /{id}/tasks`, merged into the project routes
pub fn project_tasks_router<T, P, U>(service: TaskService<T, P, U>) -> Router
where
    T: TaskRepository + 'static,
    P: ProjectRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/{id}/tasks", get(list_project_tasks))
        .with_state(Arc::new(service))
}

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks ordered by id", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<T: TaskRepository, P: ProjectRepository, U: UserRepository>(
    State(service): State<SharedService<T, P, U>>,
) -> PlannerResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<T: TaskRepository, P: ProjectRepository, U: UserRepository>(
    State(service): State<SharedService<T, P, U>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> PlannerResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "The task, or null when no task has this id", body = Option<Task>),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<T: TaskRepository, P: ProjectRepository, U: UserRepository>(
    State(service): State<SharedService<T, P, U>>,
    IdPath(id): IdPath,
) -> PlannerResult<Json<Option<Task>>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Update a task
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<T: TaskRepository, P: ProjectRepository, U: UserRepository>(
    State(service): State<SharedService<T, P, U>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> PlannerResult<Json<Task>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted successfully", body = DeleteResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<T: TaskRepository, P: ProjectRepository, U: UserRepository>(
    State(service): State<SharedService<T, P, U>>,
    IdPath(id): IdPath,
) -> PlannerResult<Json<DeleteResponse>> {
    service.delete_task(id).await?;
    Ok(Json(DeleteResponse::ok()))
}

/// List the tasks of a project
#[utoipa::path(
    get,
    path = "/{id}/tasks",
    tag = "projects",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Tasks of the project ordered by id", body = Vec<Task>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_project_tasks<T: TaskRepository, P: ProjectRepository, U: UserRepository>(
    State(service): State<SharedService<T, P, U>>,
    IdPath(id): IdPath,
) -> PlannerResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks_by_project(id).await?;
    Ok(Json(tasks))
}
