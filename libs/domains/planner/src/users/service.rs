use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use super::models::{CreateUser, UpdateUser, User};
use super::repository::UserRepository;
use crate::error::{PlannerError, PlannerResult};
use crate::tasks::TaskRepository;

/// Service layer for User business logic
///
/// Holds the task repository to unassign a user's tasks on delete.
pub struct UserService<U: UserRepository, T: TaskRepository> {
    users: Arc<U>,
    tasks: Arc<T>,
}

impl<U: UserRepository, T: TaskRepository> Clone for UserService<U, T> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<U: UserRepository, T: TaskRepository> UserService<U, T> {
    pub fn new(users: U, tasks: T) -> Self {
        Self {
            users: Arc::new(users),
            tasks: Arc::new(tasks),
        }
    }

    /// Create a user; fails with `DuplicateEmail` if the email is taken
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> PlannerResult<User> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        if self.users.get_by_email(&input.email).await?.is_some() {
            return Err(PlannerError::DuplicateEmail(input.email));
        }

        self.users.create(input).await
    }

    /// Get a user by ID; a missing user is `None`, not an error
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i32) -> PlannerResult<Option<User>> {
        self.users.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> PlannerResult<Vec<User>> {
        self.users.list().await
    }

    /// Update a user
    ///
    /// Moving to an email held by a different user is a conflict; re-sending
    /// the user's own email is not.
    #[instrument(skip(self, input), fields(user_id = id))]
    pub async fn update_user(&self, id: i32, input: UpdateUser) -> PlannerResult<User> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        let current = self
            .users
            .get_by_id(id)
            .await?
            .ok_or_else(|| PlannerError::user_not_found(id))?;

        if let Some(email) = &input.email {
            if let Some(holder) = self.users.get_by_email(email).await? {
                if holder.id != id {
                    return Err(PlannerError::DuplicateEmail(email.clone()));
                }
            }
        }

        if input.is_empty() {
            return Ok(current);
        }

        self.users.update(id, input).await
    }

    /// Delete a user after clearing it as assignee from every task
    #[instrument(skip(self), fields(user_id = id))]
    pub async fn delete_user(&self, id: i32) -> PlannerResult<()> {
        if self.users.get_by_id(id).await?.is_none() {
            return Err(PlannerError::user_not_found(id));
        }

        let unassigned = self.tasks.unassign_user(id).await?;
        if unassigned > 0 {
            tracing::info!(user_id = id, unassigned, "Unassigned tasks of deleted user");
        }

        if !self.users.delete(id).await? {
            return Err(PlannerError::user_not_found(id));
        }

        Ok(())
    }
}
