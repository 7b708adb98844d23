//! Planner Domain
//!
//! Users, projects and the tasks that tie them together.
//!
//! # Architecture
//!
//! Each entity module follows the same layering:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, existence checks, cascades
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and Postgres impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! Services for one entity hold the repositories of the others they must
//! consult: deleting a user unassigns its tasks, deleting a project removes
//! its tasks, and creating a task checks its project and assignee.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_planner::{
//!     InMemoryProjectRepository, InMemoryTaskRepository, InMemoryUserRepository,
//!     ProjectService, TaskService, UserService,
//! };
//!
//! let users = InMemoryUserRepository::new();
//! let projects = InMemoryProjectRepository::new();
//! let tasks = InMemoryTaskRepository::new();
//!
//! let router = domain_planner::router(
//!     UserService::new(users.clone(), tasks.clone()),
//!     ProjectService::new(projects.clone(), tasks.clone()),
//!     TaskService::new(tasks, projects, users),
//! );
//! ```

pub mod dates;
pub mod error;
pub mod models;
pub mod patch;
pub mod projects;
pub mod tasks;
pub mod users;

use axum::Router;

pub use error::{PlannerError, PlannerResult};
pub use models::DeleteResponse;
pub use patch::Patch;
pub use projects::{
    CreateProject, InMemoryProjectRepository, PgProjectRepository, Project, ProjectRepository,
    ProjectService, ProjectStatus, UpdateProject,
};
pub use tasks::{
    CreateTask, InMemoryTaskRepository, PgTaskRepository, Task, TaskPriority, TaskRepository,
    TaskService, TaskStatus, UpdateTask,
};
pub use users::{
    CreateUser, InMemoryUserRepository, PgUserRepository, UpdateUser, User, UserRepository,
    UserService,
};

/// Compose the planner routes: `/users`, `/projects` (including
/// `/projects/{id}/tasks`) and `/tasks`
pub fn router<U, P, T>(
    users: UserService<U, T>,
    projects: ProjectService<P, T>,
    tasks: TaskService<T, P, U>,
) -> Router
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
{
    Router::new()
        .nest("/users", users::handlers::router(users))
        .nest(
            "/projects",
            projects::handlers::router(projects)
                .merge(tasks::handlers::project_tasks_router(tasks.clone())),
        )
        .nest("/tasks", tasks::handlers::router(tasks))
}
