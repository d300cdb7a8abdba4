use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::gym::GymDto;

/// Expiry classification of a membership relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Active,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipFeeDto {
    pub id: i32,
    pub member_id: i32,
    pub amount: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_expired: bool,
    pub notified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub user_id: i32,
    pub gym_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub latest_fee: Option<MembershipFeeDto>,
    pub expiry_status: Option<ExpiryStatus>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMemberDto {
    /// Defaults to the gym selected in the session.
    #[serde(default)]
    pub gym_id: Option<i32>,
    pub name: String,
    pub email: String,
    /// A random password is generated when omitted.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub fee_amount: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenewMembershipDto {
    pub amount: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpiringMemberDto {
    pub member_id: i32,
    pub gym_id: i32,
    pub name: String,
    pub email: String,
    pub end_date: DateTime<Utc>,
    pub days_to_expiry: i64,
    pub status: ExpiryStatus,
}

/// A member's view of their own membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipSummaryDto {
    pub member_id: i32,
    pub gym: GymDto,
    pub status: Option<ExpiryStatus>,
    pub days_to_expiry: Option<i64>,
    pub latest_fee: Option<MembershipFeeDto>,
    pub fees: Vec<MembershipFeeDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpirySweepDto {
    pub notified: u64,
}
