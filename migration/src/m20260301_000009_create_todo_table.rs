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
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(pk_auto(Todo::Id))
                    .col(integer(Todo::UserId))
                    .col(string(Todo::Title))
                    .col(text_null(Todo::Description))
                    .col(boolean(Todo::Completed).default(false))
                    .col(boolean(Todo::IsActive).default(true))
                    .col(boolean(Todo::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(Todo::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Todo::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_user_id")
                            .from(Todo::Table, Todo::UserId)
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
            .drop_table(Table::drop().table(Todo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Todo {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Completed,
    IsActive,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
