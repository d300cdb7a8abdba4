use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000006_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MembershipFee::Table)
                    .if_not_exists()
                    .col(pk_auto(MembershipFee::Id))
                    .col(integer(MembershipFee::MemberId))
                    .col(double(MembershipFee::Amount))
                    .col(timestamp_with_time_zone(MembershipFee::StartDate))
                    .col(timestamp_with_time_zone(MembershipFee::EndDate))
                    .col(boolean(MembershipFee::IsExpired).default(false))
                    .col(boolean(MembershipFee::Notified).default(false))
                    .col(
                        timestamp_with_time_zone(MembershipFee::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_fee_member_id")
                            .from(MembershipFee::Table, MembershipFee::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_membership_fee_end_date_notified")
                            .col(MembershipFee::EndDate)
                            .col(MembershipFee::Notified),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipFee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MembershipFee {
    Table,
    Id,
    MemberId,
    Amount,
    StartDate,
    EndDate,
    IsExpired,
    Notified,
    CreatedAt,
}
