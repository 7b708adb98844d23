use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

use crate::dates;
use crate::patch::{Patch, non_null};

/// Task workflow status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
pub enum TaskStatus {
    #[sea_orm(string_value = "To Do")]
    #[serde(rename = "To Do")]
    #[strum(serialize = "To Do")]
    ToDo,
    #[sea_orm(string_value = "In Progress")]
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Done")]
    #[serde(rename = "Done")]
    #[strum(serialize = "Done")]
    Done,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_priority")]
pub enum TaskPriority {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
}

/// Task entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Option<i32>,
    pub project_id: i32,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "Task title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "dates::option")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-01-01")]
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignee_id: Option<i32>,
    pub project_id: i32,
}

/// DTO for updating an existing task
///
/// `assignee_id: null` unassigns the task. `project_id` moves it to another project.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "Task title is required"))]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default, deserialize_with = "dates::patch")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-01-01")]
    pub due_date: Patch<DateTime<Utc>>,
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "non_null")]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub assignee_id: Patch<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub project_id: Option<i32>,
}

impl UpdateTask {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_missing()
            && self.due_date.is_missing()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee_id.is_missing()
            && self.project_id.is_none()
    }
}

impl Task {
    pub(crate) fn apply_update(&mut self, input: UpdateTask) {
        if let Some(title) = input.title {
            self.title = title;
        }
        input.description.apply_to(&mut self.description);
        input.due_date.apply_to(&mut self.due_date);
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(priority) = input.priority {
            self.priority = priority;
        }
        input.assignee_id.apply_to(&mut self.assignee_id);
        if let Some(project_id) = input.project_id {
            self.project_id = project_id;
        }
    }
}
