use sea_orm::DatabaseConnection;

use crate::server::{
    data::feature::FeatureRepository,
    error::AppError,
    model::subscription::{CreateFeatureParams, Feature, UpdateFeatureParams},
};

pub struct FeatureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeatureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateFeatureParams) -> Result<Feature, AppError> {
        Ok(FeatureRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Feature>, AppError> {
        Ok(FeatureRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, params: UpdateFeatureParams) -> Result<Option<Feature>, AppError> {
        Ok(FeatureRepository::new(self.db).update(params).await?)
    }

    pub async fn toggle_status(&self, id: i32) -> Result<Option<Feature>, AppError> {
        Ok(FeatureRepository::new(self.db).toggle_active(id).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(FeatureRepository::new(self.db).soft_delete(id).await?)
    }
}
