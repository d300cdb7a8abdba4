//! Gym factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating gyms owned by a given user.
pub struct GymFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    is_active: bool,
    is_deleted: bool,
}

impl<'a> GymFactory<'a> {
    /// Defaults: `"Gym {id}"`, active, not deleted.
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Gym {}", next_id()),
            is_active: true,
            is_deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    pub async fn build(self) -> Result<entity::gym::Model, DbErr> {
        let now = Utc::now();
        entity::gym::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active gym for the owner.
pub async fn create_gym(db: &DatabaseConnection, owner_id: i32) -> Result<entity::gym::Model, DbErr> {
    GymFactory::new(db, owner_id).build().await
}
