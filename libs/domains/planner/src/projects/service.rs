use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use super::models::{CreateProject, Project, UpdateProject};
use super::repository::ProjectRepository;
use crate::error::{PlannerError, PlannerResult};
use crate::tasks::TaskRepository;

/// Service layer for Project business logic
pub struct ProjectService<P: ProjectRepository, T: TaskRepository> {
    projects: Arc<P>,
    tasks: Arc<T>,
}

impl<P: ProjectRepository, T: TaskRepository> Clone for ProjectService<P, T> {
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<P: ProjectRepository, T: TaskRepository> ProjectService<P, T> {
    pub fn new(projects: P, tasks: T) -> Self {
        Self {
            projects: Arc::new(projects),
            tasks: Arc::new(tasks),
        }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_project(&self, input: CreateProject) -> PlannerResult<Project> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        self.projects.create(input).await
    }

    /// Get a project by ID; a missing project is `None`, not an error
    #[instrument(skip(self))]
    pub async fn get_project(&self, id: i32) -> PlannerResult<Option<Project>> {
        self.projects.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> PlannerResult<Vec<Project>> {
        self.projects.list().await
    }

    /// Update the fields present in `input`; an empty input returns the current row
    #[instrument(skip(self, input), fields(project_id = id))]
    pub async fn update_project(&self, id: i32, input: UpdateProject) -> PlannerResult<Project> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        let current = self
            .projects
            .get_by_id(id)
            .await?
            .ok_or_else(|| PlannerError::project_not_found(id))?;

        if input.is_empty() {
            return Ok(current);
        }

        self.projects.update(id, input).await
    }

    /// Delete a project together with all of its tasks
    #[instrument(skip(self), fields(project_id = id))]
    pub async fn delete_project(&self, id: i32) -> PlannerResult<()> {
        if self.projects.get_by_id(id).await?.is_none() {
            return Err(PlannerError::project_not_found(id));
        }

        let removed = self.tasks.delete_by_project(id).await?;
        if removed > 0 {
            tracing::info!(project_id = id, removed, "Deleted tasks of project");
        }

        if !self.projects.delete(id).await? {
            return Err(PlannerError::project_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;
    use crate::projects::models::ProjectStatus;
    use crate::projects::repository::MockProjectRepository;
    use crate::tasks::repository::MockTaskRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn project(id: i32) -> Project {
        Project {
            id,
            name: "Apollo".to_string(),
            description: None,
            status: ProjectStatus::Active,
            start_date: None,
            end_date: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let mut projects = MockProjectRepository::new();
        projects.expect_create().never();

        let service = ProjectService::new(projects, MockTaskRepository::new());
        let result = service
            .create_project(CreateProject {
                name: String::new(),
                description: None,
                status: ProjectStatus::Active,
                start_date: None,
                end_date: None,
            })
            .await;

        assert!(matches!(result, Err(PlannerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_project_is_not_found() {
        let mut projects = MockProjectRepository::new();
        projects.expect_get_by_id().returning(|_| Ok(None));
        projects.expect_update().never();

        let service = ProjectService::new(projects, MockTaskRepository::new());
        let result = service
            .update_project(
                8,
                UpdateProject {
                    description: Patch::Null,
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(PlannerError::NotFound { entity: "Project", id: 8 })
        ));
    }

    #[tokio::test]
    async fn test_update_forwards_present_fields() {
        let mut projects = MockProjectRepository::new();
        projects
            .expect_get_by_id()
            .returning(|id| Ok(Some(project(id))));
        projects
            .expect_update()
            .withf(|id, input| *id == 2 && input.name.as_deref() == Some("Gemini"))
            .returning(|id, input| {
                let mut p = project(id);
                p.apply_update(input);
                Ok(p)
            });

        let service = ProjectService::new(projects, MockTaskRepository::new());
        let updated = service
            .update_project(
                2,
                UpdateProject {
                    name: Some("Gemini".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Gemini");
    }

    #[tokio::test]
    async fn test_delete_removes_tasks_then_project() {
        let mut seq = mockall::Sequence::new();
        let mut projects = MockProjectRepository::new();
        let mut tasks = MockTaskRepository::new();

        projects
            .expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(Some(project(id))));
        tasks
            .expect_delete_by_project()
            .with(eq(5))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(3));
        projects
            .expect_delete()
            .with(eq(5))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let service = ProjectService::new(projects, tasks);
        service.delete_project(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_project_is_not_found() {
        let mut projects = MockProjectRepository::new();
        let mut tasks = MockTaskRepository::new();
        projects.expect_get_by_id().returning(|_| Ok(None));
        tasks.expect_delete_by_project().never();

        let service = ProjectService::new(projects, tasks);
        let result = service.delete_project(5).await;

        assert!(matches!(result, Err(PlannerError::NotFound { .. })));
    }
}
