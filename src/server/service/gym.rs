use sea_orm::DatabaseConnection;

use crate::server::{
    data::gym::GymRepository,
    error::AppError,
    model::{
        gym::{CreateGymParams, Gym, UpdateGymParams},
        user::User,
    },
    service::quota::{Quota, QuotaService},
};

pub struct GymService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GymService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a gym after checking the owner's gym quota.
    pub async fn create(&self, owner: &User, params: CreateGymParams) -> Result<Gym, AppError> {
        QuotaService::new(self.db)
            .ensure_available(owner, Quota::Gyms)
            .await?;

        Ok(GymRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Gym>, AppError> {
        Ok(GymRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Gym>, AppError> {
        Ok(GymRepository::new(self.db).get_by_owner(owner_id).await?)
    }

    /// Gets one of the owner's gyms. Returns None if missing or owned by someone else.
    pub async fn get_owned(&self, id: i32, owner_id: i32) -> Result<Option<Gym>, AppError> {
        Ok(GymRepository::new(self.db).find_owned(id, owner_id).await?)
    }

    /// Updates a gym. Returns None if missing or owned by someone else.
    pub async fn update(&self, params: UpdateGymParams) -> Result<Option<Gym>, AppError> {
        Ok(GymRepository::new(self.db).update(params).await?)
    }

    /// Flips a gym's active flag. Returns None if missing or owned by someone else.
    pub async fn toggle_status(&self, id: i32, owner_id: i32) -> Result<Option<Gym>, AppError> {
        Ok(GymRepository::new(self.db).toggle_active(id, owner_id).await?)
    }

    /// Soft-deletes a gym. Returns false if missing or owned by someone else.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, AppError> {
        Ok(GymRepository::new(self.db).soft_delete(id, owner_id).await?)
    }

    /// Resolves which of the owner's gyms a request applies to.
    ///
    /// An explicit gym must be owned by the caller. Without one, every non-deleted gym
    /// of the owner is in scope.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Gym IDs in scope, possibly empty
    /// - `Err(AppError::NotFound)` - The explicit gym is missing or not owned
    pub async fn scope(&self, owner_id: i32, gym_id: Option<i32>) -> Result<Vec<i32>, AppError> {
        let repo = GymRepository::new(self.db);

        match gym_id {
            Some(gym_id) => match repo.find_owned(gym_id, owner_id).await? {
                Some(gym) => Ok(vec![gym.id]),
                None => Err(AppError::not_found("Gym")),
            },
            None => Ok(repo.get_ids_by_owner(owner_id).await?),
        }
    }
}
