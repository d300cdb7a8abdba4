use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000004_create_user_table::User, m20260301_000005_create_gym_table::Gym,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(integer(Member::UserId))
                    .col(integer(Member::GymId))
                    .col(boolean(Member::IsActive).default(true))
                    .col(boolean(Member::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(Member::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Member::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_user_id")
                            .from(Member::Table, Member::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_gym_id")
                            .from(Member::Table, Member::GymId)
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
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    UserId,
    GymId,
    IsActive,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
