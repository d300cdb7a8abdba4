use sea_orm::DatabaseConnection;

use crate::server::{
    data::{equipment::EquipmentRepository, gym::GymRepository},
    error::AppError,
    model::{
        equipment::{CreateEquipmentParams, Equipment, UpdateEquipmentParams},
        user::User,
    },
    service::quota::{Quota, QuotaService},
};

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds equipment to one of the owner's gyms after the quota check.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The gym is missing or not owned
    /// - `Err(AppError::BadRequest)` - Equipment quota reached
    pub async fn create(
        &self,
        owner: &User,
        params: CreateEquipmentParams,
    ) -> Result<Equipment, AppError> {
        if GymRepository::new(self.db)
            .find_owned(params.gym_id, owner.id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Gym"));
        }

        QuotaService::new(self.db)
            .ensure_available(owner, Quota::Equipment)
            .await?;

        EquipmentRepository::new(self.db).create(params).await
    }

    pub async fn get_in_gyms(&self, gym_ids: &[i32]) -> Result<Vec<Equipment>, AppError> {
        EquipmentRepository::new(self.db).get_by_gyms(gym_ids).await
    }

    /// Gets one piece of the owner's equipment. Returns None if missing or not owned.
    pub async fn get_owned(&self, id: i32, owner_id: i32) -> Result<Option<Equipment>, AppError> {
        let gym_ids = GymRepository::new(self.db).get_ids_by_owner(owner_id).await?;

        EquipmentRepository::new(self.db)
            .find_in_gyms(id, &gym_ids)
            .await
    }

    /// Updates equipment. Returns None if missing or not owned.
    pub async fn update(
        &self,
        owner_id: i32,
        params: UpdateEquipmentParams,
    ) -> Result<Option<Equipment>, AppError> {
        let gym_ids = GymRepository::new(self.db).get_ids_by_owner(owner_id).await?;

        EquipmentRepository::new(self.db)
            .update(params, &gym_ids)
            .await
    }

    /// Flips the active flag. Returns None if missing or not owned.
    pub async fn toggle_status(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<Equipment>, AppError> {
        let gym_ids = GymRepository::new(self.db).get_ids_by_owner(owner_id).await?;

        EquipmentRepository::new(self.db)
            .toggle_active(id, &gym_ids)
            .await
    }

    /// Soft-deletes equipment. Returns false if missing or not owned.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, AppError> {
        let gym_ids = GymRepository::new(self.db).get_ids_by_owner(owner_id).await?;

        EquipmentRepository::new(self.db)
            .soft_delete(id, &gym_ids)
            .await
    }
}
