use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gym::Table)
                    .if_not_exists()
                    .col(pk_auto(Gym::Id))
                    .col(integer(Gym::OwnerId))
                    .col(string(Gym::Name))
                    .col(string_null(Gym::Address))
                    .col(string_null(Gym::Phone))
                    .col(string_null(Gym::Email))
                    .col(boolean(Gym::IsActive).default(true))
                    .col(boolean(Gym::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(Gym::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Gym::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gym_owner_id")
                            .from(Gym::Table, Gym::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gym::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gym {
    Table,
    Id,
    OwnerId,
    Name,
    Address,
    Phone,
    Email,
    IsActive,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
