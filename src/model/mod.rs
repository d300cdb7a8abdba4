//! Request and response DTOs for the JSON API.
//!
//! These types define the wire format of every endpoint. Server-side domain models in
//! `server::model` convert into them at the controller boundary.

pub mod analytics;
pub mod api;
pub mod auth;
pub mod equipment;
pub mod gym;
pub mod member;
pub mod subscription;
pub mod todo;
pub mod upload;
pub mod user;
