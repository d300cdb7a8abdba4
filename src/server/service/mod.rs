//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce ownership
//! scoping and plan quotas, classify memberships, run the expiry sweep and talk to
//! external collaborators (mail API, upload directory). They work with domain models,
//! never DTOs or entity models.

pub mod analytics;
pub mod auth;
pub mod equipment;
pub mod expiry;
pub mod feature;
pub mod gym;
pub mod mail;
pub mod member;
pub mod membership;
pub mod quota;
pub mod subscription;
pub mod todo;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
