use chrono::{DateTime, Utc};

use crate::{
    model::member::{
        CreateMemberDto, MemberDto, MembershipFeeDto, RenewMembershipDto, UpdateMemberDto,
    },
    server::{
        error::AppError,
        model::{membership, user::User},
        util::{password, validate},
    },
};

/// Length of the password generated for members created without one.
const GENERATED_PASSWORD_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct MembershipFee {
    pub id: i32,
    pub member_id: i32,
    pub amount: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_expired: bool,
    pub notified: bool,
}

impl MembershipFee {
    pub fn from_entity(entity: entity::membership_fee::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            amount: entity.amount,
            start_date: entity.start_date,
            end_date: entity.end_date,
            is_expired: entity.is_expired,
            notified: entity.notified,
        }
    }

    pub fn into_dto(self) -> MembershipFeeDto {
        MembershipFeeDto {
            id: self.id,
            member_id: self.member_id,
            amount: self.amount,
            start_date: self.start_date,
            end_date: self.end_date,
            is_expired: self.is_expired,
            notified: self.notified,
        }
    }
}

/// A member joined with its user and latest fee.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub gym_id: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub user: User,
    pub latest_fee: Option<MembershipFee>,
}

impl Member {
    pub fn from_entities(
        member: entity::member::Model,
        user: entity::user::Model,
        latest_fee: Option<entity::membership_fee::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: member.id,
            gym_id: member.gym_id,
            is_active: member.is_active,
            created_at: member.created_at,
            user: User::from_entity(user)?,
            latest_fee: latest_fee.map(MembershipFee::from_entity),
        })
    }

    /// Converts to a DTO, classifying the latest fee against `now`.
    pub fn into_dto(self, now: DateTime<Utc>) -> MemberDto {
        let expiry_status = self
            .latest_fee
            .as_ref()
            .map(|fee| membership::classify(fee.end_date, now));

        MemberDto {
            id: self.id,
            user_id: self.user.id,
            gym_id: self.gym_id,
            name: self.user.name,
            email: self.user.email,
            phone: self.user.phone,
            address: self.user.address,
            is_active: self.is_active,
            latest_fee: self.latest_fee.map(MembershipFee::into_dto),
            expiry_status,
            created_at: self.created_at,
        }
    }
}

/// A fee period to record for a member.
#[derive(Debug, Clone)]
pub struct NewFeeParams {
    pub amount: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl NewFeeParams {
    pub fn new(
        amount: f64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        if end_date <= start_date {
            return Err(AppError::bad_request(
                "Membership end date must be after its start date",
            ));
        }

        Ok(Self {
            amount: validate::non_negative("Fee amount", amount)?,
            start_date,
            end_date,
        })
    }

    pub fn from_renew_dto(dto: RenewMembershipDto) -> Result<Self, AppError> {
        Self::new(dto.amount, dto.start_date, dto.end_date)
    }
}

/// Parameters for creating a member along with its user and first fee.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub gym_id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub fee: NewFeeParams,
}

impl CreateMemberParams {
    /// Validates the request and hashes the (possibly generated) password.
    pub fn from_dto(gym_id: i32, dto: CreateMemberDto) -> Result<Self, AppError> {
        let password = match dto.password {
            Some(password) => {
                password::validate_password(&password)?;
                password
            }
            None => password::generate_password(GENERATED_PASSWORD_LENGTH),
        };

        Ok(Self {
            gym_id,
            name: validate::required_text("Name", &dto.name)?,
            email: validate::email(&dto.email)?,
            phone: validate::optional_text(dto.phone),
            address: validate::optional_text(dto.address),
            fee: NewFeeParams::new(dto.fee_amount, dto.start_date, dto.end_date)?,
            password_hash: password::hash_password(&password)?,
        })
    }
}

/// Partial update of a member's user fields.
#[derive(Debug, Clone)]
pub struct UpdateMemberParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UpdateMemberParams {
    pub fn from_dto(id: i32, dto: UpdateMemberDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|n| validate::required_text("Name", &n))
                .transpose()?,
            email: dto.email.map(|e| validate::email(&e)).transpose()?,
            phone: validate::optional_text(dto.phone),
            address: validate::optional_text(dto.address),
        })
    }
}

/// A fee that is due for an expiry notification, with the data the email needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DueFee {
    pub fee: MembershipFee,
    pub member_name: String,
    pub member_email: String,
    pub gym_name: String,
}
