//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and perform one query, update or
//! small transaction each. They take parameter models in and hand domain models out, so
//! SeaORM entity models never leak past this layer. Soft-deleted rows are filtered here.

pub mod analytics;
pub mod equipment;
pub mod feature;
pub mod gym;
pub mod member;
pub mod membership_fee;
pub mod subscription;
pub mod todo;
pub mod user;

#[cfg(test)]
mod test;
