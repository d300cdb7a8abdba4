use chrono::{DateTime, Utc};

use crate::{
    model::todo::{CreateTodoDto, TodoDto, UpdateTodoDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn from_entity(entity: entity::todo::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            completed: entity.completed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TodoDto {
        TodoDto {
            id: self.id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTodoParams {
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl CreateTodoParams {
    pub fn from_dto(user_id: i32, dto: CreateTodoDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            title: validate::required_text("Title", &dto.title)?,
            description: validate::optional_text(dto.description),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTodoParams {
    pub id: i32,
    pub user_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoParams {
    pub fn from_dto(id: i32, user_id: i32, dto: UpdateTodoDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            user_id,
            title: dto
                .title
                .map(|t| validate::required_text("Title", &t))
                .transpose()?,
            description: validate::optional_text(dto.description),
            completed: dto.completed,
        })
    }
}
