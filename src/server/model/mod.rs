//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input from controllers to services.

pub mod analytics;
pub mod equipment;
pub mod gym;
pub mod member;
pub mod membership;
pub mod subscription;
pub mod todo;
pub mod user;
