use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use super::models::{CreateTask, Task, UpdateTask};
use super::repository::TaskRepository;
use crate::error::{PlannerError, PlannerResult};
use crate::patch::Patch;
use crate::projects::ProjectRepository;
use crate::users::UserRepository;

/// Service layer for Task business logic
///
/// Checks that the referenced project and assignee exist before each write.
pub struct TaskService<T: TaskRepository, P: ProjectRepository, U: UserRepository> {
    tasks: Arc<T>,
    projects: Arc<P>,
    users: Arc<U>,
}

impl<T: TaskRepository, P: ProjectRepository, U: UserRepository> Clone for TaskService<T, P, U> {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            projects: Arc::clone(&self.projects),
            users: Arc::clone(&self.users),
        }
    }
}

impl<T: TaskRepository, P: ProjectRepository, U: UserRepository> TaskService<T, P, U> {
    pub fn new(tasks: T, projects: P, users: U) -> Self {
        Self {
            tasks: Arc::new(tasks),
            projects: Arc::new(projects),
            users: Arc::new(users),
        }
    }

    async fn ensure_project(&self, project_id: i32) -> PlannerResult<()> {
        match self.projects.get_by_id(project_id).await? {
            Some(_) => Ok(()),
            None => Err(PlannerError::project_not_found(project_id)),
        }
    }

    async fn ensure_user(&self, user_id: i32) -> PlannerResult<()> {
        match self.users.get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(PlannerError::user_not_found(user_id)),
        }
    }

    /// Create a task; the project and, if given, the assignee must exist
    #[instrument(skip(self, input), fields(project_id = input.project_id))]
    pub async fn create_task(&self, input: CreateTask) -> PlannerResult<Task> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        self.ensure_project(input.project_id).await?;
        if let Some(assignee_id) = input.assignee_id {
            self.ensure_user(assignee_id).await?;
        }

        self.tasks.create(input).await
    }

    /// Get a task by ID; a missing task is `None`, not an error
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: i32) -> PlannerResult<Option<Task>> {
        self.tasks.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> PlannerResult<Vec<Task>> {
        self.tasks.list().await
    }

    /// Tasks of a project; unlike `get_task`, a missing project is `NotFound`
    #[instrument(skip(self))]
    pub async fn list_tasks_by_project(&self, project_id: i32) -> PlannerResult<Vec<Task>> {
        self.ensure_project(project_id).await?;
        self.tasks.list_by_project(project_id).await
    }

    /// Update a task, re-checking a replacement project or assignee
    #[instrument(skip(self, input), fields(task_id = id))]
    pub async fn update_task(&self, id: i32, input: UpdateTask) -> PlannerResult<Task> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        let current = self
            .tasks
            .get_by_id(id)
            .await?
            .ok_or_else(|| PlannerError::task_not_found(id))?;

        if let Some(project_id) = input.project_id {
            self.ensure_project(project_id).await?;
        }
        if let Patch::Value(assignee_id) = input.assignee_id {
            self.ensure_user(assignee_id).await?;
        }

        if input.is_empty() {
            return Ok(current);
        }

        self.tasks.update(id, input).await
    }

    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete_task(&self, id: i32) -> PlannerResult<()> {
        if !self.tasks.delete(id).await? {
            return Err(PlannerError::task_not_found(id));
        }

        Ok(())
    }
}
