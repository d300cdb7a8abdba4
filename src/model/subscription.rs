use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFeatureDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFeatureDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub max_gyms: i32,
    pub max_members: i32,
    pub max_equipment: i32,
    pub is_active: bool,
    pub features: Vec<FeatureDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSubscriptionDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub max_gyms: i32,
    pub max_members: i32,
    pub max_equipment: i32,
    #[serde(default)]
    pub feature_ids: Vec<i32>,
}

/// Partial update; `feature_ids`, when present, replaces the plan's feature set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSubscriptionDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub monthly_price: Option<f64>,
    #[serde(default)]
    pub yearly_price: Option<f64>,
    #[serde(default)]
    pub max_gyms: Option<i32>,
    #[serde(default)]
    pub max_members: Option<i32>,
    #[serde(default)]
    pub max_equipment: Option<i32>,
    #[serde(default)]
    pub feature_ids: Option<Vec<i32>>,
}
