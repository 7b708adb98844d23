use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr};

use super::entity;
use super::models::{CreateUser, UpdateUser, User};
use super::repository::UserRepository;
use crate::error::{PlannerError, PlannerResult};

#[derive(Clone)]
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

/// Unique violations can only come from `users.email`
fn map_write_err(err: DbErr, email: Option<&str>) -> PlannerError {
    match (err.sql_err(), email) {
        (Some(SqlErr::UniqueConstraintViolation(_)), Some(email)) => {
            PlannerError::DuplicateEmail(email.to_string())
        }
        _ => err.into(),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: CreateUser) -> PlannerResult<User> {
        let email = input.email.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| map_write_err(e, Some(&email)))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> PlannerResult<Option<User>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_email(&self, email: &str) -> PlannerResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(self.base.db())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> PlannerResult<Vec<User>> {
        let models = self.base.find_all(entity::Column::Id).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateUser) -> PlannerResult<User> {
        let model = self
            .base
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlannerError::user_not_found(id))?;

        if input.is_empty() {
            return Ok(model.into());
        }

        let email = input.email.clone();
        let mut active_model: entity::ActiveModel = model.into();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(email) = input.email {
            active_model.email = Set(email);
        }

        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(|e| map_write_err(e, email.as_deref()))?;

        tracing::info!(user_id = %id, "Updated user");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> PlannerResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
