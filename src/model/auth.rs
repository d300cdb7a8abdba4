use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{Role, UserDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignUpDto {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

/// The signed-in user together with the claims held in their session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    pub user: UserDto,
    pub role: Role,
    pub selected_gym_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSessionDto {
    pub selected_gym_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
