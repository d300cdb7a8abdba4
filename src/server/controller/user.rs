use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        user::{AssignSubscriptionDto, PaginatedUsersDto, Role, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListParams {
    /// Only list users with this role.
    pub role: Option<Role>,
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// List users one page at a time.
///
/// # Access Control
/// - `SUPERADMIN`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListParams),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(params.role, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Activate or deactivate a user.
///
/// A deactivated user is rejected on their next request.
///
/// # Access Control
/// - `SUPERADMIN`, never on their own account
#[utoipa::path(
    patch,
    path = "/api/users/{id}/toggle-status",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Status toggled", body = UserDto),
        (status = 400, description = "Cannot change own status", body = ErrorDto),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let user = UserService::new(&state.db)
        .toggle_status(&actor, id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Soft-delete a user.
///
/// # Access Control
/// - `SUPERADMIN`, never on their own account
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    if !UserService::new(&state.db).delete(&actor, id).await? {
        return Err(AppError::not_found("User"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a subscription plan to an owner, or clear it with `null`.
///
/// # Access Control
/// - `SUPERADMIN`
#[utoipa::path(
    put,
    path = "/api/users/{id}/subscription",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = AssignSubscriptionDto,
    responses(
        (status = 200, description = "Plan assigned", body = UserDto),
        (status = 400, description = "User is not an owner", body = ErrorDto),
        (status = 403, description = "Not a superadmin", body = ErrorDto),
        (status = 404, description = "User or plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssignSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin])
        .await?;

    let user = UserService::new(&state.db)
        .assign_subscription(id, payload.subscription_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    tracing::info!(
        "Assigned plan {:?} to owner {}",
        user.subscription_id,
        user.id
    );

    Ok((StatusCode::OK, Json(user.into_dto())))
}
