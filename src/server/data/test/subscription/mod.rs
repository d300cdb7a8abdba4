use crate::server::{
    data::subscription::SubscriptionRepository,
    model::subscription::{CreateSubscriptionParams, UpdateSubscriptionParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active;
mod update;

fn plan_params(name: &str, monthly_price: f64, feature_ids: Vec<i32>) -> CreateSubscriptionParams {
    CreateSubscriptionParams {
        name: name.to_string(),
        description: None,
        monthly_price,
        yearly_price: monthly_price * 10.0,
        max_gyms: 1,
        max_members: 50,
        max_equipment: 20,
        feature_ids,
    }
}

fn empty_update(id: i32) -> UpdateSubscriptionParams {
    UpdateSubscriptionParams {
        id,
        name: None,
        description: None,
        monthly_price: None,
        yearly_price: None,
        max_gyms: None,
        max_members: None,
        max_equipment: None,
        feature_ids: None,
    }
}
