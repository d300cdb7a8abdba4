use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feature::Table)
                    .if_not_exists()
                    .col(pk_auto(Feature::Id))
                    .col(string(Feature::Name))
                    .col(text_null(Feature::Description))
                    .col(boolean(Feature::IsActive).default(true))
                    .col(boolean(Feature::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Feature::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Feature::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feature {
    Table,
    Id,
    Name,
    Description,
    IsActive,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
