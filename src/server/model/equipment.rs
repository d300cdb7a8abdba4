use chrono::{DateTime, Utc};

use crate::{
    model::equipment::{CreateEquipmentDto, EquipmentDto, EquipmentType, UpdateEquipmentDto},
    server::{
        error::AppError,
        util::{parse::parse_equipment_type, validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
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

impl Equipment {
    /// # Returns
    /// - `Err(AppError::InternalErr(ParseEquipmentType))` - The stored type is unknown
    pub fn from_entity(entity: entity::equipment::Model) -> Result<Self, AppError> {
        let equipment_type = parse_equipment_type(entity.id, &entity.equipment_type)?;

        Ok(Self {
            id: entity.id,
            gym_id: entity.gym_id,
            name: entity.name,
            equipment_type,
            quantity: entity.quantity,
            weight: entity.weight,
            image_url: entity.image_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> EquipmentDto {
        EquipmentDto {
            id: self.id,
            gym_id: self.gym_id,
            name: self.name,
            equipment_type: self.equipment_type,
            quantity: self.quantity,
            weight: self.weight,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn positive_quantity(quantity: i32) -> Result<i32, AppError> {
    if quantity < 1 {
        return Err(AppError::bad_request("Quantity must be at least 1"));
    }
    Ok(quantity)
}

fn optional_weight(weight: Option<f64>) -> Result<Option<f64>, AppError> {
    weight
        .map(|w| validate::non_negative("Weight", w))
        .transpose()
}

#[derive(Debug, Clone)]
pub struct CreateEquipmentParams {
    pub gym_id: i32,
    pub name: String,
    pub equipment_type: EquipmentType,
    pub quantity: i32,
    pub weight: Option<f64>,
    pub image_url: Option<String>,
}

impl CreateEquipmentParams {
    pub fn from_dto(gym_id: i32, dto: CreateEquipmentDto) -> Result<Self, AppError> {
        Ok(Self {
            gym_id,
            name: validate::required_text("Name", &dto.name)?,
            equipment_type: dto.equipment_type,
            quantity: positive_quantity(dto.quantity)?,
            weight: optional_weight(dto.weight)?,
            image_url: validate::optional_text(dto.image_url),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEquipmentParams {
    pub id: i32,
    pub name: Option<String>,
    pub equipment_type: Option<EquipmentType>,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
    pub image_url: Option<String>,
}

impl UpdateEquipmentParams {
    pub fn from_dto(id: i32, dto: UpdateEquipmentDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|n| validate::required_text("Name", &n))
                .transpose()?,
            equipment_type: dto.equipment_type,
            quantity: dto.quantity.map(positive_quantity).transpose()?,
            weight: optional_weight(dto.weight)?,
            image_url: validate::optional_text(dto.image_url),
        })
    }
}
