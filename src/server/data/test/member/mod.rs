use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{CreateMemberParams, NewFeeParams},
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_gyms;

/// Builds valid creation params for a member of `gym_id`.
fn member_params(gym_id: i32, email: &str) -> CreateMemberParams {
    let now = Utc::now();

    CreateMemberParams {
        gym_id,
        name: "Jane Lifter".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        phone: None,
        address: None,
        fee: NewFeeParams {
            amount: 40.0,
            start_date: now,
            end_date: now + Duration::days(30),
        },
    }
}
