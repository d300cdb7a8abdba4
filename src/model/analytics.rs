use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::equipment::EquipmentType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanUsageDto {
    pub subscription_id: i32,
    pub name: String,
    pub owners: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminAnalyticsDto {
    pub total_owners: u64,
    pub total_gyms: u64,
    pub total_members: u64,
    pub total_equipment: u64,
    pub active_subscriptions: u64,
    pub monthly_recurring_revenue: f64,
    pub plans: Vec<PlanUsageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentTypeCountDto {
    pub equipment_type: EquipmentType,
    pub units: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerAnalyticsDto {
    pub total_gyms: u64,
    pub total_members: u64,
    pub active_members: u64,
    pub expired_memberships: u64,
    pub expiring_soon_memberships: u64,
    pub total_equipment_units: i64,
    pub equipment_by_type: Vec<EquipmentTypeCountDto>,
    pub total_fee_revenue: f64,
}
