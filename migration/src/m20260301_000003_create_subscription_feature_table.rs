use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_subscription_table::Subscription,
    m20260301_000002_create_feature_table::Feature,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(SubscriptionFeature::Id))
                    .col(integer(SubscriptionFeature::SubscriptionId))
                    .col(integer(SubscriptionFeature::FeatureId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_feature_subscription_id")
                            .from(SubscriptionFeature::Table, SubscriptionFeature::SubscriptionId)
                            .to(Subscription::Table, Subscription::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_feature_feature_id")
                            .from(SubscriptionFeature::Table, SubscriptionFeature::FeatureId)
                            .to(Feature::Table, Feature::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_subscription_feature_unique")
                            .col(SubscriptionFeature::SubscriptionId)
                            .col(SubscriptionFeature::FeatureId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionFeature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubscriptionFeature {
    Table,
    Id,
    SubscriptionId,
    FeatureId,
}
