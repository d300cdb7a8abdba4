//! Equipment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating equipment in a gym.
pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    gym_id: i32,
    name: String,
    equipment_type: String,
    quantity: i32,
    weight: Option<f64>,
    is_deleted: bool,
}

impl<'a> EquipmentFactory<'a> {
    /// Defaults: `"Equipment {id}"`, type `CARDIO`, quantity 1, no weight.
    pub fn new(db: &'a DatabaseConnection, gym_id: i32) -> Self {
        Self {
            db,
            gym_id,
            name: format!("Equipment {}", next_id()),
            equipment_type: "CARDIO".to_string(),
            quantity: 1,
            weight: None,
            is_deleted: false,
        }
    }

    pub fn equipment_type(mut self, equipment_type: impl Into<String>) -> Self {
        self.equipment_type = equipment_type.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        let now = Utc::now();
        entity::equipment::ActiveModel {
            gym_id: ActiveValue::Set(self.gym_id),
            name: ActiveValue::Set(self.name),
            equipment_type: ActiveValue::Set(self.equipment_type),
            quantity: ActiveValue::Set(self.quantity),
            weight: ActiveValue::Set(self.weight),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates one cardio machine in the gym.
pub async fn create_equipment(
    db: &DatabaseConnection,
    gym_id: i32,
) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db, gym_id).build().await
}
