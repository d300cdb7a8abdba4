//! Feature data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::subscription::{CreateFeatureParams, Feature, UpdateFeatureParams};

pub struct FeatureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeatureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateFeatureParams) -> Result<Feature, DbErr> {
        let now = Utc::now();

        let entity = entity::feature::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feature::from_entity(entity))
    }

    /// Gets every non-deleted feature, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Feature>, DbErr> {
        let entities = entity::prelude::Feature::find()
            .filter(entity::feature::Column::IsDeleted.eq(false))
            .order_by_asc(entity::feature::Column::Name)
            .order_by_asc(entity::feature::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Feature::from_entity).collect())
    }

    async fn find_entity(&self, id: i32) -> Result<Option<entity::feature::Model>, DbErr> {
        entity::prelude::Feature::find_by_id(id)
            .filter(entity::feature::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Checks that every ID names a non-deleted feature.
    pub async fn all_exist(&self, ids: &[i32]) -> Result<bool, DbErr> {
        if ids.is_empty() {
            return Ok(true);
        }

        let count = entity::prelude::Feature::find()
            .filter(entity::feature::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::feature::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count == ids.len() as u64)
    }

    /// Applies a partial update. Returns `None` when the feature does not exist.
    pub async fn update(&self, params: UpdateFeatureParams) -> Result<Option<Feature>, DbErr> {
        let Some(entity) = self.find_entity(params.id).await? else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Feature::from_entity(entity)))
    }

    /// Flips `is_active`. Returns `None` when the feature does not exist.
    pub async fn toggle_active(&self, id: i32) -> Result<Option<Feature>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let is_active = entity.is_active;
        let mut active_model = entity.into_active_model();
        active_model.is_active = ActiveValue::Set(!is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Feature::from_entity(entity)))
    }

    /// Marks the feature deleted. Returns `false` when missing or already deleted.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Feature::update_many()
            .col_expr(
                entity::feature::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::feature::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::feature::Column::Id.eq(id))
            .filter(entity::feature::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
