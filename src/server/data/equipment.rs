//! Equipment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::equipment::EquipmentType,
    server::{
        error::AppError,
        model::equipment::{CreateEquipmentParams, Equipment, UpdateEquipmentParams},
    },
};

pub struct EquipmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEquipmentParams) -> Result<Equipment, AppError> {
        let now = Utc::now();

        let entity = entity::equipment::ActiveModel {
            gym_id: ActiveValue::Set(params.gym_id),
            name: ActiveValue::Set(params.name),
            equipment_type: ActiveValue::Set(params.equipment_type.as_str().to_string()),
            quantity: ActiveValue::Set(params.quantity),
            weight: ActiveValue::Set(params.weight),
            image_url: ActiveValue::Set(params.image_url),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Equipment::from_entity(entity)
    }

    /// Gets non-deleted equipment of the given gyms, ordered by name.
    pub async fn get_by_gyms(&self, gym_ids: &[i32]) -> Result<Vec<Equipment>, AppError> {
        if gym_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::GymId.is_in(gym_ids.iter().copied()))
            .filter(entity::equipment::Column::IsDeleted.eq(false))
            .order_by_asc(entity::equipment::Column::Name)
            .order_by_asc(entity::equipment::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Equipment::from_entity).collect()
    }

    async fn find_entity_in_gyms(
        &self,
        id: i32,
        gym_ids: &[i32],
    ) -> Result<Option<entity::equipment::Model>, AppError> {
        if gym_ids.is_empty() {
            return Ok(None);
        }

        let entity = entity::prelude::Equipment::find_by_id(id)
            .filter(entity::equipment::Column::GymId.is_in(gym_ids.iter().copied()))
            .filter(entity::equipment::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Finds non-deleted equipment that belongs to one of the given gyms.
    pub async fn find_in_gyms(
        &self,
        id: i32,
        gym_ids: &[i32],
    ) -> Result<Option<Equipment>, AppError> {
        self.find_entity_in_gyms(id, gym_ids)
            .await?
            .map(Equipment::from_entity)
            .transpose()
    }

    /// Applies a partial update. Returns `None` when missing or outside `gym_ids`.
    pub async fn update(
        &self,
        params: UpdateEquipmentParams,
        gym_ids: &[i32],
    ) -> Result<Option<Equipment>, AppError> {
        let Some(entity) = self.find_entity_in_gyms(params.id, gym_ids).await? else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(equipment_type) = params.equipment_type {
            active_model.equipment_type = ActiveValue::Set(equipment_type.as_str().to_string());
        }
        if let Some(quantity) = params.quantity {
            active_model.quantity = ActiveValue::Set(quantity);
        }
        if let Some(weight) = params.weight {
            active_model.weight = ActiveValue::Set(Some(weight));
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Equipment::from_entity(entity)?))
    }

    /// Flips `is_active`. Returns `None` when missing or outside `gym_ids`.
    pub async fn toggle_active(
        &self,
        id: i32,
        gym_ids: &[i32],
    ) -> Result<Option<Equipment>, AppError> {
        let Some(entity) = self.find_entity_in_gyms(id, gym_ids).await? else {
            return Ok(None);
        };

        let is_active = entity.is_active;
        let mut active_model = entity.into_active_model();
        active_model.is_active = ActiveValue::Set(!is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Equipment::from_entity(entity)?))
    }

    /// Marks equipment deleted. Returns `false` when missing or outside `gym_ids`.
    pub async fn soft_delete(&self, id: i32, gym_ids: &[i32]) -> Result<bool, AppError> {
        if gym_ids.is_empty() {
            return Ok(false);
        }

        let result = entity::prelude::Equipment::update_many()
            .col_expr(
                entity::equipment::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::equipment::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::equipment::Column::Id.eq(id))
            .filter(entity::equipment::Column::GymId.is_in(gym_ids.iter().copied()))
            .filter(entity::equipment::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts non-deleted equipment rows across the given gyms.
    pub async fn count_in_gyms(&self, gym_ids: &[i32]) -> Result<u64, AppError> {
        if gym_ids.is_empty() {
            return Ok(0);
        }

        let count = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::GymId.is_in(gym_ids.iter().copied()))
            .filter(entity::equipment::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Counts every non-deleted equipment row.
    pub async fn count_all(&self) -> Result<u64, AppError> {
        let count = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Total units (sum of quantities) per equipment type across the given gyms.
    ///
    /// Types with no equipment are omitted. Results are ordered by type.
    pub async fn units_by_type(
        &self,
        gym_ids: &[i32],
    ) -> Result<Vec<(EquipmentType, i64)>, AppError> {
        let equipment = self.get_by_gyms(gym_ids).await?;

        let mut units: Vec<(EquipmentType, i64)> = Vec::new();
        for item in equipment {
            match units.iter_mut().find(|(t, _)| *t == item.equipment_type) {
                Some((_, total)) => *total += i64::from(item.quantity),
                None => units.push((item.equipment_type, i64::from(item.quantity))),
            }
        }
        units.sort_by_key(|(t, _)| *t);

        Ok(units)
    }
}
