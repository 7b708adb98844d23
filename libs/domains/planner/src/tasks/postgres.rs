use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entity;
use super::models::{CreateTask, Task, UpdateTask};
use super::repository::TaskRepository;
use crate::error::{PlannerError, PlannerResult};

#[derive(Clone)]
pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: CreateTask) -> PlannerResult<Task> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(task_id = %model.id, project_id = %model.project_id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<Task>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> PlannerResult<Vec<Task>> {
        let models = self.base.find_all(entity::Column::Id).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_project(&self, project_id: i32) -> PlannerResult<Vec<Task>> {
        let models = entity::Entity::find()
            .filter(entity::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateTask) -> PlannerResult<Task> {
        let model = self
            .base
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlannerError::task_not_found(id))?;

        if input.is_empty() {
            return Ok(model.into());
        }

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(title) = input.title {
            active_model.title = Set(title);
        }
        if let Some(description) = input.description.into_update() {
            active_model.description = Set(description);
        }
        if let Some(due_date) = input.due_date.into_update() {
            active_model.due_date = Set(due_date.map(Into::into));
        }
        if let Some(status) = input.status {
            active_model.status = Set(status);
        }
        if let Some(priority) = input.priority {
            active_model.priority = Set(priority);
        }
        if let Some(assignee_id) = input.assignee_id.into_update() {
            active_model.assignee_id = Set(assignee_id);
        }
        if let Some(project_id) = input.project_id {
            active_model.project_id = Set(project_id);
        }

        let updated = self.base.update(active_model).await?;

        tracing::info!(task_id = %id, "Updated task");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> PlannerResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete_by_project(&self, project_id: i32) -> PlannerResult<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::ProjectId.eq(project_id))
            .exec(self.base.db())
            .await?;

        Ok(result.rows_affected)
    }

    async fn unassign_user(&self, user_id: i32) -> PlannerResult<u64> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::AssigneeId, Expr::value(Option::<i32>::None))
            .filter(entity::Column::AssigneeId.eq(user_id))
            .exec(self.base.db())
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::models::{TaskPriority, TaskStatus};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, project_id: i32) -> entity::Model {
        entity::Model {
            id,
            title: "Write docs".to_string(),
            description: None,
            due_date: None,
            status: TaskStatus::ToDo,
            priority: TaskPriority::High,
            assignee_id: Some(3),
            project_id,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_list_by_project_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, 4), model(2, 4)]])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let tasks = repo.list_by_project(4).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.project_id == 4));
        assert_eq!(tasks[0].priority, TaskPriority::High);
    }

    #[tokio::test]
    async fn test_bulk_operations_report_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 3,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
            ])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        assert_eq!(repo.delete_by_project(4).await.unwrap(), 3);
        assert_eq!(repo.unassign_user(3).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let result = repo
            .update(
                11,
                UpdateTask {
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(PlannerError::NotFound { entity: "Task", id: 11 })
        ));
    }
}
