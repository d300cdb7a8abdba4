use sea_orm::DatabaseConnection;

use crate::server::{
    data::{feature::FeatureRepository, subscription::SubscriptionRepository},
    error::AppError,
    model::subscription::{CreateSubscriptionParams, Subscription, UpdateSubscriptionParams},
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a plan linked to the given features.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - A feature ID does not exist
    pub async fn create(&self, params: CreateSubscriptionParams) -> Result<Subscription, AppError> {
        self.ensure_features_exist(&params.feature_ids).await?;

        Ok(SubscriptionRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Subscription>, AppError> {
        Ok(SubscriptionRepository::new(self.db).get_all().await?)
    }

    pub async fn get_active(&self) -> Result<Vec<Subscription>, AppError> {
        Ok(SubscriptionRepository::new(self.db).get_active().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Subscription>, AppError> {
        Ok(SubscriptionRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates a plan, replacing its feature links when `feature_ids` is given.
    pub async fn update(
        &self,
        params: UpdateSubscriptionParams,
    ) -> Result<Option<Subscription>, AppError> {
        if let Some(feature_ids) = &params.feature_ids {
            self.ensure_features_exist(feature_ids).await?;
        }

        Ok(SubscriptionRepository::new(self.db).update(params).await?)
    }

    pub async fn toggle_status(&self, id: i32) -> Result<Option<Subscription>, AppError> {
        Ok(SubscriptionRepository::new(self.db).toggle_active(id).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(SubscriptionRepository::new(self.db).soft_delete(id).await?)
    }

    async fn ensure_features_exist(&self, feature_ids: &[i32]) -> Result<(), AppError> {
        if !FeatureRepository::new(self.db).all_exist(feature_ids).await? {
            return Err(AppError::bad_request("One or more features do not exist"));
        }

        Ok(())
    }
}
