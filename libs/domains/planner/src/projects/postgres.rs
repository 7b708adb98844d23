use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::DatabaseConnection;

use super::entity;
use super::models::{CreateProject, Project, UpdateProject};
use super::repository::ProjectRepository;
use crate::error::{PlannerError, PlannerResult};

#[derive(Clone)]
pub struct PgProjectRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, input: CreateProject) -> PlannerResult<Project> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(project_id = %model.id, "Created project");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<Project>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> PlannerResult<Vec<Project>> {
        let models = self.base.find_all(entity::Column::Id).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateProject) -> PlannerResult<Project> {
        let model = self
            .base
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlannerError::project_not_found(id))?;

        if input.is_empty() {
            return Ok(model.into());
        }

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description.into_update() {
            active_model.description = Set(description);
        }
        if let Some(status) = input.status {
            active_model.status = Set(status);
        }
        if let Some(start_date) = input.start_date.into_update() {
            active_model.start_date = Set(start_date.map(Into::into));
        }
        if let Some(end_date) = input.end_date.into_update() {
            active_model.end_date = Set(end_date.map(Into::into));
        }

        let updated = self.base.update(active_model).await?;

        tracing::info!(project_id = %id, "Updated project");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> PlannerResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(project_id = %id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;
    use crate::projects::models::ProjectStatus;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i32) -> entity::Model {
        entity::Model {
            id,
            name: "Apollo".to_string(),
            description: Some("moon".to_string()),
            status: ProjectStatus::Active,
            start_date: None,
            end_date: None,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_update_with_no_fields_skips_write() {
        // Only the lookup is scripted; a write would exhaust the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1)]])
            .into_connection();
        let repo = PgProjectRepository::new(db);

        let project = repo.update(1, UpdateProject::default()).await.unwrap();
        assert_eq!(project.description.as_deref(), Some("moon"));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProjectRepository::new(db);

        let result = repo
            .update(
                7,
                UpdateProject {
                    description: Patch::Null,
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(PlannerError::NotFound { entity: "Project", id: 7 })
        ));
    }
}
