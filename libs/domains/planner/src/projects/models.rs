use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

use crate::dates;
use crate::patch::{Patch, non_null};

/// Project lifecycle status
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_status")]
pub enum ProjectStatus {
    #[sea_orm(string_value = "Active")]
    #[serde(rename = "Active")]
    #[strum(serialize = "Active")]
    Active,
    #[sea_orm(string_value = "On Hold")]
    #[serde(rename = "On Hold")]
    #[strum(serialize = "On Hold")]
    OnHold,
    #[sea_orm(string_value = "Completed")]
    #[serde(rename = "Completed")]
    #[strum(serialize = "Completed")]
    Completed,
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// No ordering against `end_date` is enforced
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "dates::option")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-01-01")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::option")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-01-01")]
    pub end_date: Option<DateTime<Utc>>,
}

/// DTO for updating an existing project
///
/// Absent keys leave a column unchanged; `null` clears a nullable one.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "dates::patch")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-01-01")]
    pub start_date: Patch<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::patch")]
    #[schema(value_type = Option<String>, format = DateTime, example = "2025-01-01")]
    pub end_date: Patch<DateTime<Utc>>,
}

impl UpdateProject {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_missing()
            && self.status.is_none()
            && self.start_date.is_missing()
            && self.end_date.is_missing()
    }
}

impl Project {
    pub(crate) fn apply_update(&mut self, input: UpdateProject) {
        if let Some(name) = input.name {
            self.name = name;
        }
        input.description.apply_to(&mut self.description);
        if let Some(status) = input.status {
            self.status = status;
        }
        input.start_date.apply_to(&mut self.start_date);
        input.end_date.apply_to(&mut self.end_date);
    }
}
