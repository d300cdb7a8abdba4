use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscription::Id))
                    .col(string(Subscription::Name))
                    .col(text_null(Subscription::Description))
                    .col(double(Subscription::MonthlyPrice))
                    .col(double(Subscription::YearlyPrice))
                    .col(integer(Subscription::MaxGyms))
                    .col(integer(Subscription::MaxMembers))
                    .col(integer(Subscription::MaxEquipment))
                    .col(boolean(Subscription::IsActive).default(true))
                    .col(boolean(Subscription::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Subscription::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Subscription::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    Id,
    Name,
    Description,
    MonthlyPrice,
    YearlyPrice,
    MaxGyms,
    MaxMembers,
    MaxEquipment,
    IsActive,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
