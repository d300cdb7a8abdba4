use crate::{
    model::subscription::{
        CreateFeatureDto, CreateSubscriptionDto, FeatureDto, SubscriptionDto, UpdateFeatureDto,
        UpdateSubscriptionDto,
    },
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Feature {
    pub fn from_entity(entity: entity::feature::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> FeatureDto {
        FeatureDto {
            id: self.id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        }
    }
}

/// Subscription plan with its linked features.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub max_gyms: i32,
    pub max_members: i32,
    pub max_equipment: i32,
    pub is_active: bool,
    pub features: Vec<Feature>,
}

impl Subscription {
    pub fn from_entity(
        entity: entity::subscription::Model,
        features: Vec<entity::feature::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            monthly_price: entity.monthly_price,
            yearly_price: entity.yearly_price,
            max_gyms: entity.max_gyms,
            max_members: entity.max_members,
            max_equipment: entity.max_equipment,
            is_active: entity.is_active,
            features: features.into_iter().map(Feature::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            id: self.id,
            name: self.name,
            description: self.description,
            monthly_price: self.monthly_price,
            yearly_price: self.yearly_price,
            max_gyms: self.max_gyms,
            max_members: self.max_members,
            max_equipment: self.max_equipment,
            is_active: self.is_active,
            features: self.features.into_iter().map(Feature::into_dto).collect(),
        }
    }
}

fn quota(field: &str, value: i32) -> Result<i32, AppError> {
    if value < 0 {
        return Err(AppError::bad_request(format!(
            "{} must be zero or greater",
            field
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct CreateSubscriptionParams {
    pub name: String,
    pub description: Option<String>,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub max_gyms: i32,
    pub max_members: i32,
    pub max_equipment: i32,
    pub feature_ids: Vec<i32>,
}

impl CreateSubscriptionParams {
    pub fn from_dto(dto: CreateSubscriptionDto) -> Result<Self, AppError> {
        let mut feature_ids = dto.feature_ids;
        feature_ids.sort_unstable();
        feature_ids.dedup();

        Ok(Self {
            name: validate::required_text("Name", &dto.name)?,
            description: validate::optional_text(dto.description),
            monthly_price: validate::non_negative("Monthly price", dto.monthly_price)?,
            yearly_price: validate::non_negative("Yearly price", dto.yearly_price)?,
            max_gyms: quota("Max gyms", dto.max_gyms)?,
            max_members: quota("Max members", dto.max_members)?,
            max_equipment: quota("Max equipment", dto.max_equipment)?,
            feature_ids,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSubscriptionParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub monthly_price: Option<f64>,
    pub yearly_price: Option<f64>,
    pub max_gyms: Option<i32>,
    pub max_members: Option<i32>,
    pub max_equipment: Option<i32>,
    pub feature_ids: Option<Vec<i32>>,
}

impl UpdateSubscriptionParams {
    pub fn from_dto(id: i32, dto: UpdateSubscriptionDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|n| validate::required_text("Name", &n))
                .transpose()?,
            description: validate::optional_text(dto.description),
            monthly_price: dto
                .monthly_price
                .map(|p| validate::non_negative("Monthly price", p))
                .transpose()?,
            yearly_price: dto
                .yearly_price
                .map(|p| validate::non_negative("Yearly price", p))
                .transpose()?,
            max_gyms: dto.max_gyms.map(|q| quota("Max gyms", q)).transpose()?,
            max_members: dto.max_members.map(|q| quota("Max members", q)).transpose()?,
            max_equipment: dto
                .max_equipment
                .map(|q| quota("Max equipment", q))
                .transpose()?,
            feature_ids: dto.feature_ids.map(|mut ids| {
                ids.sort_unstable();
                ids.dedup();
                ids
            }),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeatureParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateFeatureParams {
    pub fn from_dto(dto: CreateFeatureDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::required_text("Name", &dto.name)?,
            description: validate::optional_text(dto.description),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateFeatureParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateFeatureParams {
    pub fn from_dto(id: i32, dto: UpdateFeatureDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|n| validate::required_text("Name", &n))
                .transpose()?,
            description: validate::optional_text(dto.description),
        })
    }
}
