use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use super::models::{CreateProject, Project, UpdateProject};
use crate::error::{PlannerError, PlannerResult};

/// Repository trait for Project persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, input: CreateProject) -> PlannerResult<Project>;

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<Project>>;

    /// All projects ordered by id
    async fn list(&self) -> PlannerResult<Vec<Project>>;

    /// Apply the present fields; `NotFound` if the id is unknown
    async fn update(&self, id: i32, input: UpdateProject) -> PlannerResult<Project>;

    /// Returns false when no row had this id. Does not touch tasks.
    async fn delete(&self, id: i32) -> PlannerResult<bool>;
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<BTreeMap<i32, Project>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, input: CreateProject) -> PlannerResult<Project> {
        let project = Project {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: input.name,
            description: input.description,
            status: input.status,
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: Utc::now(),
        };

        self.projects
            .write()
            .await
            .insert(project.id, project.clone());

        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn list(&self) -> PlannerResult<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProject) -> PlannerResult<Project> {
        let mut projects = self.projects.write().await;

        let project = projects
            .get_mut(&id)
            .ok_or_else(|| PlannerError::project_not_found(id))?;
        project.apply_update(input);

        tracing::info!(project_id = %id, "Updated project");
        Ok(project.clone())
    }

    async fn delete(&self, id: i32) -> PlannerResult<bool> {
        let mut projects = self.projects.write().await;

        if projects.remove(&id).is_some() {
            tracing::info!(project_id = %id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
