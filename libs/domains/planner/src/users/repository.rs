use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use super::models::{CreateUser, UpdateUser, User};
use crate::error::{PlannerError, PlannerResult};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; a taken email fails with `DuplicateEmail`
    async fn create(&self, input: CreateUser) -> PlannerResult<User>;

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<User>>;

    /// Exact, case-sensitive email lookup
    async fn get_by_email(&self, email: &str) -> PlannerResult<Option<User>>;

    /// All users ordered by id
    async fn list(&self) -> PlannerResult<Vec<User>>;

    /// Apply the present fields; `NotFound` if the id is unknown
    async fn update(&self, id: i32, input: UpdateUser) -> PlannerResult<User>;

    /// Returns false when no row had this id
    async fn delete(&self, id: i32) -> PlannerResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i32, User>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> PlannerResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == input.email) {
            return Err(PlannerError::DuplicateEmail(input.email));
        }

        let user = User {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: input.name,
            email: input.email,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> PlannerResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> PlannerResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateUser) -> PlannerResult<User> {
        let mut users = self.users.write().await;

        if let Some(email) = &input.email {
            if users.values().any(|u| u.id != id && &u.email == email) {
                return Err(PlannerError::DuplicateEmail(email.clone()));
            }
        }

        let user = users
            .get_mut(&id)
            .ok_or_else(|| PlannerError::user_not_found(id))?;
        user.apply_update(input);

        tracing::info!(user_id = %id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> PlannerResult<bool> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
