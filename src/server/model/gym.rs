use chrono::{DateTime, Utc};

use crate::{
    model::gym::{CreateGymDto, GymDto, UpdateGymDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gym {
    pub fn from_entity(entity: entity::gym::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            address: entity.address,
            phone: entity.phone,
            email: entity.email,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GymDto {
        GymDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGymParams {
    pub owner_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CreateGymParams {
    pub fn from_dto(owner_id: i32, dto: CreateGymDto) -> Result<Self, AppError> {
        Ok(Self {
            owner_id,
            name: validate::required_text("Name", &dto.name)?,
            address: validate::optional_text(dto.address),
            phone: validate::optional_text(dto.phone),
            email: validate::optional_text(dto.email)
                .map(|e| validate::email(&e))
                .transpose()?,
        })
    }
}

/// Partial update of a gym, scoped to its owner.
#[derive(Debug, Clone)]
pub struct UpdateGymParams {
    pub id: i32,
    pub owner_id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl UpdateGymParams {
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateGymDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            owner_id,
            name: dto
                .name
                .map(|n| validate::required_text("Name", &n))
                .transpose()?,
            address: validate::optional_text(dto.address),
            phone: validate::optional_text(dto.phone),
            email: validate::optional_text(dto.email)
                .map(|e| validate::email(&e))
                .transpose()?,
        })
    }
}
