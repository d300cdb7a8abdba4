//! Todo data repository. Every query is scoped to the owning user.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::todo::{CreateTodoParams, Todo, UpdateTodoParams};

pub struct TodoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TodoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTodoParams) -> Result<Todo, DbErr> {
        let now = Utc::now();

        let entity = entity::todo::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            completed: ActiveValue::Set(false),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Todo::from_entity(entity))
    }

    /// Gets the user's non-deleted todos, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Todo>, DbErr> {
        let entities = entity::prelude::Todo::find()
            .filter(entity::todo::Column::UserId.eq(user_id))
            .filter(entity::todo::Column::IsDeleted.eq(false))
            .order_by_desc(entity::todo::Column::CreatedAt)
            .order_by_desc(entity::todo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Todo::from_entity).collect())
    }

    async fn find_owned_entity(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::todo::Model>, DbErr> {
        entity::prelude::Todo::find_by_id(id)
            .filter(entity::todo::Column::UserId.eq(user_id))
            .filter(entity::todo::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Applies a partial update. Returns `None` when missing or owned by someone else.
    pub async fn update(&self, params: UpdateTodoParams) -> Result<Option<Todo>, DbErr> {
        let Some(entity) = self.find_owned_entity(params.id, params.user_id).await? else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(completed) = params.completed {
            active_model.completed = ActiveValue::Set(completed);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Todo::from_entity(entity)))
    }

    /// Flips `completed`. Returns `None` when missing or owned by someone else.
    pub async fn toggle_completed(&self, id: i32, user_id: i32) -> Result<Option<Todo>, DbErr> {
        let Some(entity) = self.find_owned_entity(id, user_id).await? else {
            return Ok(None);
        };

        let completed = entity.completed;
        let mut active_model = entity.into_active_model();
        active_model.completed = ActiveValue::Set(!completed);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Todo::from_entity(entity)))
    }

    /// Marks the todo deleted. Returns `false` when missing or owned by someone else.
    pub async fn soft_delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Todo::update_many()
            .col_expr(
                entity::todo::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::todo::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::todo::Column::Id.eq(id))
            .filter(entity::todo::Column::UserId.eq(user_id))
            .filter(entity::todo::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
