use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl PlannerError {
    pub fn user_not_found(id: i32) -> Self {
        Self::NotFound { entity: "User", id }
    }

    pub fn project_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Project",
            id,
        }
    }

    pub fn task_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Task", id }
    }
}

impl From<DbErr> for PlannerError {
    fn from(err: DbErr) -> Self {
        PlannerError::Database(err.to_string())
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;

/// Convert PlannerError to AppError for standardized error responses
impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        match err {
            e @ PlannerError::NotFound { .. } => AppError::NotFound(e.to_string()),
            e @ PlannerError::DuplicateEmail(_) => AppError::Conflict(e.to_string()),
            PlannerError::Validation(msg) => AppError::BadRequest(msg),
            PlannerError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
