pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_subscription_table;
mod m20260301_000002_create_feature_table;
mod m20260301_000003_create_subscription_feature_table;
mod m20260301_000004_create_user_table;
mod m20260301_000005_create_gym_table;
mod m20260301_000006_create_member_table;
mod m20260301_000007_create_membership_fee_table;
mod m20260301_000008_create_equipment_table;
mod m20260301_000009_create_todo_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_subscription_table::Migration),
            Box::new(m20260301_000002_create_feature_table::Migration),
            Box::new(m20260301_000003_create_subscription_feature_table::Migration),
            Box::new(m20260301_000004_create_user_table::Migration),
            Box::new(m20260301_000005_create_gym_table::Migration),
            Box::new(m20260301_000006_create_member_table::Migration),
            Box::new(m20260301_000007_create_membership_fee_table::Migration),
            Box::new(m20260301_000008_create_equipment_table::Migration),
            Box::new(m20260301_000009_create_todo_table::Migration),
        ]
    }
}
