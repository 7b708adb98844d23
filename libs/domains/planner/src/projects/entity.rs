use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::{CreateProject, Project, ProjectStatus};

/// Sea-ORM Entity for the projects table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            status: model.status,
            start_date: model.start_date.map(Into::into),
            end_date: model.end_date.map(Into::into),
            created_at: model.created_at.into(),
        }
    }
}

impl From<CreateProject> for ActiveModel {
    fn from(input: CreateProject) -> Self {
        ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            status: Set(input.status),
            start_date: Set(input.start_date.map(Into::into)),
            end_date: Set(input.end_date.map(Into::into)),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
    }
}
