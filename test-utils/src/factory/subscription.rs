//! Subscription plan and feature factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating subscription plans.
///
/// Defaults: `"Plan {id}"`, 29.0 monthly, 290.0 yearly, quotas of 2 gyms,
/// 5 members and 5 equipment rows, active.
pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    monthly_price: f64,
    yearly_price: f64,
    max_gyms: i32,
    max_members: i32,
    max_equipment: i32,
    is_active: bool,
}

impl<'a> SubscriptionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Plan {}", id),
            monthly_price: 29.0,
            yearly_price: 290.0,
            max_gyms: 2,
            max_members: 5,
            max_equipment: 5,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn monthly_price(mut self, price: f64) -> Self {
        self.monthly_price = price;
        self
    }

    /// Sets the gym, member and equipment quotas.
    pub fn quotas(mut self, max_gyms: i32, max_members: i32, max_equipment: i32) -> Self {
        self.max_gyms = max_gyms;
        self.max_members = max_members;
        self.max_equipment = max_equipment;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::subscription::Model, DbErr> {
        let now = Utc::now();
        entity::subscription::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            monthly_price: ActiveValue::Set(self.monthly_price),
            yearly_price: ActiveValue::Set(self.yearly_price),
            max_gyms: ActiveValue::Set(self.max_gyms),
            max_members: ActiveValue::Set(self.max_members),
            max_equipment: ActiveValue::Set(self.max_equipment),
            is_active: ActiveValue::Set(self.is_active),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscription plan with default values.
pub async fn create_subscription(
    db: &DatabaseConnection,
) -> Result<entity::subscription::Model, DbErr> {
    SubscriptionFactory::new(db).build().await
}

/// Creates an active feature named `"Feature {id}"`.
pub async fn create_feature(db: &DatabaseConnection) -> Result<entity::feature::Model, DbErr> {
    let now = Utc::now();
    entity::feature::ActiveModel {
        name: ActiveValue::Set(format!("Feature {}", next_id())),
        description: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        is_deleted: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
