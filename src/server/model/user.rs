use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::{SignUpDto, UpdateProfileDto},
        user::{PaginatedUsersDto, Role, UserDto},
    },
    server::{
        error::AppError,
        util::{parse::parse_role, password, validate},
    },
};

/// User domain model.
///
/// Holds the password hash so the auth service can verify credentials; the hash never
/// leaves the server because `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub subscription_id: Option<i32>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            phone: self.phone,
            address: self.address,
            subscription_id: self.subscription_id,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(ParseRole))` - The stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_role(entity.id, &entity.role)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            phone: entity.phone,
            address: entity.address,
            subscription_id: entity.subscription_id,
            is_active: entity.is_active,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub subscription_id: Option<i32>,
}

impl CreateUserParams {
    /// Validates a sign-up request and hashes its password. Sign-ups always become owners.
    pub fn from_sign_up(dto: SignUpDto) -> Result<Self, AppError> {
        password::validate_password(&dto.password)?;

        Ok(Self {
            name: validate::required_text("Name", &dto.name)?,
            email: validate::email(&dto.email)?,
            password_hash: password::hash_password(&dto.password)?,
            role: Role::Owner,
            phone: validate::optional_text(dto.phone),
            address: None,
            subscription_id: dto.subscription_id,
        })
    }
}

/// Partial update of a user's own profile. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password_hash: Option<String>,
}

impl UpdateUserParams {
    /// Validates a profile update. A new password is checked and hashed.
    pub fn from_profile_dto(id: i32, dto: UpdateProfileDto) -> Result<Self, AppError> {
        let password_hash = match dto.password {
            Some(password) => {
                password::validate_password(&password)?;
                Some(password::hash_password(&password)?)
            }
            None => None,
        };

        Ok(Self {
            id,
            name: dto
                .name
                .map(|n| validate::required_text("Name", &n))
                .transpose()?,
            email: None,
            phone: validate::optional_text(dto.phone),
            address: validate::optional_text(dto.address),
            password_hash,
        })
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
