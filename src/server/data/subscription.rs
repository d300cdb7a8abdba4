//! Subscription plan data repository.
//!
//! Plans own a set of feature links in `subscription_feature`. Creating a plan and
//! replacing its links each run in a single transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::subscription::{
    CreateSubscriptionParams, Subscription, UpdateSubscriptionParams,
};

pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a plan and links its features in one transaction.
    pub async fn create(&self, params: CreateSubscriptionParams) -> Result<Subscription, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::subscription::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            monthly_price: ActiveValue::Set(params.monthly_price),
            yearly_price: ActiveValue::Set(params.yearly_price),
            max_gyms: ActiveValue::Set(params.max_gyms),
            max_members: ActiveValue::Set(params.max_members),
            max_equipment: ActiveValue::Set(params.max_equipment),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        link_features(&txn, entity.id, &params.feature_ids).await?;
        let features = features_of(&txn, entity.id).await?;

        txn.commit().await?;

        Ok(Subscription::from_entity(entity, features))
    }

    /// Gets every non-deleted plan with its features, cheapest first.
    pub async fn get_all(&self) -> Result<Vec<Subscription>, DbErr> {
        self.get_filtered(false).await
    }

    /// Gets non-deleted, active plans with their features, cheapest first.
    pub async fn get_active(&self) -> Result<Vec<Subscription>, DbErr> {
        self.get_filtered(true).await
    }

    async fn get_filtered(&self, active_only: bool) -> Result<Vec<Subscription>, DbErr> {
        let mut query = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::IsDeleted.eq(false));

        if active_only {
            query = query.filter(entity::subscription::Column::IsActive.eq(true));
        }

        let plans = query
            .order_by_asc(entity::subscription::Column::MonthlyPrice)
            .order_by_asc(entity::subscription::Column::Id)
            .find_with_related(entity::prelude::SubscriptionFeature)
            .all(self.db)
            .await?;

        let feature_ids: Vec<i32> = plans
            .iter()
            .flat_map(|(_, links)| links.iter().map(|l| l.feature_id))
            .collect();

        let features: HashMap<i32, entity::feature::Model> = if feature_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Feature::find()
                .filter(entity::feature::Column::Id.is_in(feature_ids))
                .filter(entity::feature::Column::IsDeleted.eq(false))
                .all(self.db)
                .await?
                .into_iter()
                .map(|f| (f.id, f))
                .collect()
        };

        Ok(plans
            .into_iter()
            .map(|(plan, links)| {
                let mut linked: Vec<entity::feature::Model> = links
                    .iter()
                    .filter_map(|l| features.get(&l.feature_id).cloned())
                    .collect();
                linked.sort_by_key(|f| f.id);
                Subscription::from_entity(plan, linked)
            })
            .collect())
    }

    /// Finds a non-deleted plan with its features.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Subscription>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let features = features_of(self.db, entity.id).await?;

        Ok(Some(Subscription::from_entity(entity, features)))
    }

    async fn find_entity(&self, id: i32) -> Result<Option<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find_by_id(id)
            .filter(entity::subscription::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Applies a partial update, replacing the feature links wholesale when given.
    ///
    /// Runs in one transaction. Returns `None` when the plan does not exist.
    pub async fn update(
        &self,
        params: UpdateSubscriptionParams,
    ) -> Result<Option<Subscription>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Subscription::find_by_id(params.id)
            .filter(entity::subscription::Column::IsDeleted.eq(false))
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(monthly_price) = params.monthly_price {
            active_model.monthly_price = ActiveValue::Set(monthly_price);
        }
        if let Some(yearly_price) = params.yearly_price {
            active_model.yearly_price = ActiveValue::Set(yearly_price);
        }
        if let Some(max_gyms) = params.max_gyms {
            active_model.max_gyms = ActiveValue::Set(max_gyms);
        }
        if let Some(max_members) = params.max_members {
            active_model.max_members = ActiveValue::Set(max_members);
        }
        if let Some(max_equipment) = params.max_equipment {
            active_model.max_equipment = ActiveValue::Set(max_equipment);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(&txn).await?;

        if let Some(feature_ids) = params.feature_ids {
            entity::prelude::SubscriptionFeature::delete_many()
                .filter(entity::subscription_feature::Column::SubscriptionId.eq(entity.id))
                .exec(&txn)
                .await?;
            link_features(&txn, entity.id, &feature_ids).await?;
        }

        let features = features_of(&txn, entity.id).await?;
        txn.commit().await?;

        Ok(Some(Subscription::from_entity(entity, features)))
    }

    /// Flips `is_active`. Returns `None` when the plan does not exist.
    pub async fn toggle_active(&self, id: i32) -> Result<Option<Subscription>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let is_active = entity.is_active;
        let mut active_model = entity.into_active_model();
        active_model.is_active = ActiveValue::Set(!is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;
        let features = features_of(self.db, entity.id).await?;

        Ok(Some(Subscription::from_entity(entity, features)))
    }

    /// Marks the plan deleted. Returns `false` when missing or already deleted.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Subscription::update_many()
            .col_expr(
                entity::subscription::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::subscription::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::subscription::Column::Id.eq(id))
            .filter(entity::subscription::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts non-deleted, active plans.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::IsDeleted.eq(false))
            .filter(entity::subscription::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }
}

async fn link_features<C: ConnectionTrait>(
    db: &C,
    subscription_id: i32,
    feature_ids: &[i32],
) -> Result<(), DbErr> {
    if feature_ids.is_empty() {
        return Ok(());
    }

    let links = feature_ids
        .iter()
        .map(|feature_id| entity::subscription_feature::ActiveModel {
            subscription_id: ActiveValue::Set(subscription_id),
            feature_id: ActiveValue::Set(*feature_id),
            ..Default::default()
        });

    entity::prelude::SubscriptionFeature::insert_many(links)
        .exec(db)
        .await?;

    Ok(())
}

async fn features_of<C: ConnectionTrait>(
    db: &C,
    subscription_id: i32,
) -> Result<Vec<entity::feature::Model>, DbErr> {
    let feature_ids: Vec<i32> = entity::prelude::SubscriptionFeature::find()
        .filter(entity::subscription_feature::Column::SubscriptionId.eq(subscription_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.feature_id)
        .collect();

    if feature_ids.is_empty() {
        return Ok(Vec::new());
    }

    entity::prelude::Feature::find()
        .filter(entity::feature::Column::Id.is_in(feature_ids))
        .filter(entity::feature::Column::IsDeleted.eq(false))
        .order_by_asc(entity::feature::Column::Id)
        .all(db)
        .await
}
