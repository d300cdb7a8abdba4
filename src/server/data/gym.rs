//! Gym data repository.
//!
//! Every owner-facing query takes the owner's ID so a gym can only be read or changed
//! by the user who owns it.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::gym::{CreateGymParams, Gym, UpdateGymParams};

pub struct GymRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GymRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGymParams) -> Result<Gym, DbErr> {
        let now = Utc::now();

        let entity = entity::gym::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Gym::from_entity(entity))
    }

    /// Gets every non-deleted gym, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Gym>, DbErr> {
        let entities = entity::prelude::Gym::find()
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .order_by_asc(entity::gym::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Gym::from_entity).collect())
    }

    /// Gets the owner's non-deleted gyms, oldest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Gym>, DbErr> {
        let entities = entity::prelude::Gym::find()
            .filter(entity::gym::Column::OwnerId.eq(owner_id))
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .order_by_asc(entity::gym::Column::CreatedAt)
            .order_by_asc(entity::gym::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Gym::from_entity).collect())
    }

    /// IDs of the owner's non-deleted gyms.
    pub async fn get_ids_by_owner(&self, owner_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Gym::find()
            .select_only()
            .column(entity::gym::Column::Id)
            .filter(entity::gym::Column::OwnerId.eq(owner_id))
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .order_by_asc(entity::gym::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Finds a non-deleted gym regardless of owner.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Gym>, DbErr> {
        let entity = entity::prelude::Gym::find_by_id(id)
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Gym::from_entity))
    }

    /// Finds a non-deleted gym owned by `owner_id`.
    pub async fn find_owned(&self, id: i32, owner_id: i32) -> Result<Option<Gym>, DbErr> {
        Ok(self.find_owned_entity(id, owner_id).await?.map(Gym::from_entity))
    }

    async fn find_owned_entity(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<entity::gym::Model>, DbErr> {
        entity::prelude::Gym::find_by_id(id)
            .filter(entity::gym::Column::OwnerId.eq(owner_id))
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Applies a partial update. Returns `None` when the gym is missing or not owned.
    pub async fn update(&self, params: UpdateGymParams) -> Result<Option<Gym>, DbErr> {
        let Some(entity) = self.find_owned_entity(params.id, params.owner_id).await? else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(Some(address));
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(Some(email));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Gym::from_entity(entity)))
    }

    /// Flips `is_active`. Returns `None` when the gym is missing or not owned.
    pub async fn toggle_active(&self, id: i32, owner_id: i32) -> Result<Option<Gym>, DbErr> {
        let Some(entity) = self.find_owned_entity(id, owner_id).await? else {
            return Ok(None);
        };

        let is_active = entity.is_active;
        let mut active_model = entity.into_active_model();
        active_model.is_active = ActiveValue::Set(!is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Gym::from_entity(entity)))
    }

    /// Marks the gym deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - The gym was deleted
    /// - `Ok(false)` - Missing, already deleted or not owned
    pub async fn soft_delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Gym::update_many()
            .col_expr(
                entity::gym::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::gym::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::gym::Column::Id.eq(id))
            .filter(entity::gym::Column::OwnerId.eq(owner_id))
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the owner's non-deleted gyms.
    pub async fn count_by_owner(&self, owner_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Gym::find()
            .filter(entity::gym::Column::OwnerId.eq(owner_id))
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .count(self.db)
            .await
    }

    /// Counts every non-deleted gym.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Gym::find()
            .filter(entity::gym::Column::IsDeleted.eq(false))
            .count(self.db)
            .await
    }
}
