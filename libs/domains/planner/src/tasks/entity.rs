use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::{CreateTask, Task, TaskPriority, TaskStatus};

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub due_date: Option<DateTimeWithTimeZone>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Option<i32>,
    pub project_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            due_date: model.due_date.map(Into::into),
            status: model.status,
            priority: model.priority,
            assignee_id: model.assignee_id,
            project_id: model.project_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<CreateTask> for ActiveModel {
    fn from(input: CreateTask) -> Self {
        ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            due_date: Set(input.due_date.map(Into::into)),
            status: Set(input.status),
            priority: Set(input.priority),
            assignee_id: Set(input.assignee_id),
            project_id: Set(input.project_id),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
    }
}
