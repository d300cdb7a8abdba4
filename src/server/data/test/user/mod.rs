use crate::{
    model::user::Role,
    server::{data::user::UserRepository, error::AppError, model::user::UpdateUserParams},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod get_all_paginated;
mod soft_delete;
mod toggle_active;
mod update;
