use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentType {
    Cardio,
    Strength,
    FreeWeight,
    Machine,
    Accessory,
    Other,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "CARDIO",
            Self::Strength => "STRENGTH",
            Self::FreeWeight => "FREE_WEIGHT",
            Self::Machine => "MACHINE",
            Self::Accessory => "ACCESSORY",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CARDIO" => Ok(Self::Cardio),
            "STRENGTH" => Ok(Self::Strength),
            "FREE_WEIGHT" => Ok(Self::FreeWeight),
            "MACHINE" => Ok(Self::Machine),
            "ACCESSORY" => Ok(Self::Accessory),
            "OTHER" => Ok(Self::Other),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentDto {
    pub id: i32,
    pub gym_id: i32,
    pub name: String,
    pub equipment_type: EquipmentType,
    pub quantity: i32,
    pub weight: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEquipmentDto {
    /// Defaults to the gym selected in the session.
    #[serde(default)]
    pub gym_id: Option<i32>,
    pub name: String,
    pub equipment_type: EquipmentType,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEquipmentDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub equipment_type: Option<EquipmentType>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}
