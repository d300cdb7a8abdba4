use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000005_create_gym_table::Gym;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(integer(Equipment::GymId))
                    .col(string(Equipment::Name))
                    .col(string(Equipment::EquipmentType))
                    .col(integer(Equipment::Quantity).default(1))
                    .col(double_null(Equipment::Weight))
                    .col(string_null(Equipment::ImageUrl))
                    .col(boolean(Equipment::IsActive).default(true))
                    .col(boolean(Equipment::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Equipment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Equipment::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_gym_id")
                            .from(Equipment::Table, Equipment::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    GymId,
    Name,
    EquipmentType,
    Quantity,
    Weight,
    ImageUrl,
    IsActive,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
