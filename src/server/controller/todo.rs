use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        todo::{CreateTodoDto, TodoDto, UpdateTodoDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::todo::{CreateTodoParams, UpdateTodoParams},
        service::todo::TodoService,
        state::AppState,
    },
};

/// Tag for grouping todo endpoints in OpenAPI documentation
pub static TODO_TAG: &str = "todo";

// Todos belong to the signed-in user; every role may keep a list.

#[utoipa::path(
    post,
    path = "/api/todos",
    tag = TODO_TAG,
    request_body = CreateTodoDto,
    responses(
        (status = 201, description = "Todo created", body = TodoDto),
        (status = 400, description = "Invalid todo", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_todo(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateTodoParams::from_dto(user.id, payload)?;
    let todo = TodoService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(todo.into_dto())))
}

/// The caller's todos, newest first.
#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_TAG,
    responses(
        (status = 200, description = "The caller's todos", body = Vec<TodoDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_todos(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let todos: Vec<TodoDto> = TodoService::new(&state.db)
        .get_for_user(user.id)
        .await?
        .into_iter()
        .map(|t| t.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(todos)))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    tag = TODO_TAG,
    params(("id" = i32, Path, description = "Todo ID")),
    request_body = UpdateTodoDto,
    responses(
        (status = 200, description = "Todo updated", body = TodoDto),
        (status = 400, description = "Invalid todo", body = ErrorDto),
        (status = 404, description = "Todo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_todo(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateTodoParams::from_dto(id, user.id, payload)?;
    let todo = TodoService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| AppError::not_found("Todo"))?;

    Ok((StatusCode::OK, Json(todo.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/todos/{id}/toggle",
    tag = TODO_TAG,
    params(("id" = i32, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Completion toggled", body = TodoDto),
        (status = 404, description = "Todo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_todo(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let todo = TodoService::new(&state.db)
        .toggle_completed(id, user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Todo"))?;

    Ok((StatusCode::OK, Json(todo.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    tag = TODO_TAG,
    params(("id" = i32, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "Todo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if !TodoService::new(&state.db).delete(id, user.id).await? {
        return Err(AppError::not_found("Todo"));
    }

    Ok(StatusCode::NO_CONTENT)
}
