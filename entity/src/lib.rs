//! SeaORM entity models for the gymboard database schema.

pub mod prelude;

pub mod equipment;
pub mod feature;
pub mod gym;
pub mod member;
pub mod membership_fee;
pub mod subscription;
pub mod subscription_feature;
pub mod todo;
pub mod user;
