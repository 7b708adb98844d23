//! Handler tests for the planner domain
//!
//! These tests drive the composed router over in-memory repositories:
//! - Request deserialization and validation
//! - Status codes and error bodies
//! - Cascades across users, projects and tasks

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_planner::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let users = InMemoryUserRepository::new();
    let projects = InMemoryProjectRepository::new();
    let tasks = InMemoryTaskRepository::new();

    router(
        UserService::new(users.clone(), tasks.clone()),
        ProjectService::new(projects.clone(), tasks.clone()),
        TaskService::new(tasks, projects, users),
    )
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_project(app: &Router, name: &str) -> Value {
    let (status, project) = send(
        app,
        "POST",
        "/projects",
        Some(json!({ "name": name, "status": "Active" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    project
}

async fn create_user(app: &Router, email: &str) -> Value {
    let (status, user) = send(
        app,
        "POST",
        "/users",
        Some(json!({ "name": "Ada", "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    user
}

async fn create_task(app: &Router, project_id: &Value, assignee_id: Option<&Value>) -> Value {
    let (status, task) = send(
        app,
        "POST",
        "/tasks",
        Some(json!({
            "title": "Write docs",
            "status": "To Do",
            "priority": "Medium",
            "project_id": project_id,
            "assignee_id": assignee_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    task
}

#[tokio::test]
async fn test_create_user_returns_201() {
    let app = app();

    let user = create_user(&app, "ada@example.com").await;

    assert_eq!(user["email"], "ada@example.com");
    assert!(user["id"].is_i64());
    assert!(user["created_at"].is_string());
}

#[tokio::test]
async fn test_create_user_rejects_invalid_email() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Ada", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = app();
    create_user(&app, "ada@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Other", "email": "ada@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("ada@example.com"));
}

#[tokio::test]
async fn test_update_user_email_conflicts() {
    let app = app();
    create_user(&app, "ada@example.com").await;
    let grace = create_user(&app, "grace@example.com").await;
    let uri = format!("/users/{}", grace["id"]);

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "email": "ada@example.com" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, user) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({ "email": "grace@example.com", "name": "Grace" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Grace");
}

#[tokio::test]
async fn test_get_missing_entities_return_null() {
    let app = app();

    for uri in ["/users/42", "/projects/42", "/tasks/42"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_null(), "{uri}");
    }
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app();

    let (status, body) = send(&app, "GET", "/projects/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_create_project_rejects_unknown_status() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/projects",
        Some(json!({ "name": "Apollo", "status": "Archived" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_partial_project_update() {
    let app = app();
    let (_, project) = send(
        &app,
        "POST",
        "/projects",
        Some(json!({
            "name": "Apollo",
            "description": "moon",
            "status": "Active",
            "start_date": "2025-01-01T00:00:00Z"
        })),
    )
    .await;
    let uri = format!("/projects/{}", project["id"]);

    let (status, updated) = send(&app, "PATCH", &uri, Some(json!({ "description": null }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["description"].is_null());
    assert_eq!(updated["name"], "Apollo");
    assert_eq!(updated["start_date"], project["start_date"]);

    let (status, renamed) = send(&app, "PATCH", &uri, Some(json!({ "name": "Gemini" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Gemini");
    assert_eq!(renamed["status"], "Active");

    let (status, unchanged) = send(&app, "PATCH", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, renamed);
}

#[tokio::test]
async fn test_update_missing_project_is_not_found() {
    let app = app();

    let (status, body) = send(&app, "PATCH", "/projects/9", Some(json!({ "name": "x" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_task_with_missing_project_is_not_found() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({
            "title": "Orphan",
            "status": "To Do",
            "priority": "Low",
            "project_id": 99999
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_task_with_missing_assignee_is_not_found() {
    let app = app();
    let project = create_project(&app, "Apollo").await;

    let (status, _) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({
            "title": "Write docs",
            "status": "To Do",
            "priority": "Low",
            "project_id": project["id"],
            "assignee_id": 404
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_task_patch_returns_row_unchanged() {
    let app = app();
    let project = create_project(&app, "Apollo").await;
    let task = create_task(&app, &project["id"], None).await;

    let (status, unchanged) = send(
        &app,
        "PATCH",
        &format!("/tasks/{}", task["id"]),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, task);
}

#[tokio::test]
async fn test_date_only_values_are_accepted() {
    let app = app();
    let (status, project) = send(
        &app,
        "POST",
        "/projects",
        Some(json!({ "name": "Apollo", "status": "Active", "start_date": "2025-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(project["start_date"], "2025-01-01T00:00:00Z");

    let task = create_task(&app, &project["id"], None).await;
    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/tasks/{}", task["id"]),
        Some(json!({ "due_date": "2025-06-30" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["due_date"], "2025-06-30T00:00:00Z");

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/tasks/{}", task["id"]),
        Some(json!({ "due_date": "30/06/2025" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_task_twice() {
    let app = app();
    let project = create_project(&app, "Apollo").await;
    let task = create_task(&app, &project["id"], None).await;
    let uri = format!("/tasks/{}", task["id"]);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_unassigns_only_their_tasks() {
    let app = app();
    let project = create_project(&app, "Apollo").await;
    let ada = create_user(&app, "ada@example.com").await;
    let grace = create_user(&app, "grace@example.com").await;
    let adas = create_task(&app, &project["id"], Some(&ada["id"])).await;
    let graces = create_task(&app, &project["id"], Some(&grace["id"])).await;

    let (status, _) = send(&app, "DELETE", &format!("/users/{}", ada["id"]), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, adas) = send(&app, "GET", &format!("/tasks/{}", adas["id"]), None).await;
    let (_, graces) = send(&app, "GET", &format!("/tasks/{}", graces["id"]), None).await;
    assert!(adas["assignee_id"].is_null());
    assert_eq!(graces["assignee_id"], grace["id"]);
}

#[tokio::test]
async fn test_project_lifecycle_scenario() {
    let app = app();
    let project = create_project(&app, "Apollo").await;
    let task = create_task(&app, &project["id"], None).await;
    let tasks_uri = format!("/projects/{}/tasks", project["id"]);

    let (status, tasks) = send(&app, "GET", &tasks_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([task.clone()]));

    let (status, _) = send(&app, "DELETE", &format!("/projects/{}", project["id"]), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &tasks_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, gone) = send(&app, "GET", &format!("/tasks/{}", task["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(gone.is_null());
}
