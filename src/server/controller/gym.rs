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
        gym::{CreateGymDto, GymDto, UpdateGymDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::gym::{CreateGymParams, UpdateGymParams},
        service::gym::GymService,
        state::AppState,
    },
};

/// Tag for grouping gym endpoints in OpenAPI documentation
pub static GYM_TAG: &str = "gym";

/// Create a gym owned by the caller.
///
/// # Access Control
/// - `OWNER`, within the gym quota of their plan
///
/// # Returns
/// - `201 Created` - The new gym
/// - `400 Bad Request` - Invalid fields, no active plan, or quota reached
#[utoipa::path(
    post,
    path = "/api/gyms",
    tag = GYM_TAG,
    request_body = CreateGymDto,
    responses(
        (status = 201, description = "Gym created", body = GymDto),
        (status = 400, description = "Invalid gym data or quota reached", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gym(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let params = CreateGymParams::from_dto(owner.id, payload)?;
    let gym = GymService::new(&state.db).create(&owner, params).await?;

    Ok((StatusCode::CREATED, Json(gym.into_dto())))
}

/// List gyms.
///
/// Superadmins see every gym; owners see their own.
#[utoipa::path(
    get,
    path = "/api/gyms",
    tag = GYM_TAG,
    responses(
        (status = 200, description = "Gyms visible to the caller", body = Vec<GymDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gyms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Role::Superadmin, Role::Owner])
        .await?;

    let service = GymService::new(&state.db);
    let gyms = match user.role {
        Role::Superadmin => service.get_all().await?,
        _ => service.get_by_owner(user.id).await?,
    };

    let gyms: Vec<GymDto> = gyms.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(gyms)))
}

#[utoipa::path(
    get,
    path = "/api/gyms/{id}",
    tag = GYM_TAG,
    params(("id" = i32, Path, description = "Gym ID")),
    responses(
        (status = 200, description = "The gym", body = GymDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gym(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym = GymService::new(&state.db)
        .get_owned(id, owner.id)
        .await?
        .ok_or_else(|| AppError::not_found("Gym"))?;

    Ok((StatusCode::OK, Json(gym.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/gyms/{id}",
    tag = GYM_TAG,
    params(("id" = i32, Path, description = "Gym ID")),
    request_body = UpdateGymDto,
    responses(
        (status = 200, description = "Gym updated", body = GymDto),
        (status = 400, description = "Invalid gym data", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gym(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let params = UpdateGymParams::from_dto(id, owner.id, payload)?;
    let gym = GymService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| AppError::not_found("Gym"))?;

    Ok((StatusCode::OK, Json(gym.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/gyms/{id}/toggle-status",
    tag = GYM_TAG,
    params(("id" = i32, Path, description = "Gym ID")),
    responses(
        (status = 200, description = "Status toggled", body = GymDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_gym_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym = GymService::new(&state.db)
        .toggle_status(id, owner.id)
        .await?
        .ok_or_else(|| AppError::not_found("Gym"))?;

    Ok((StatusCode::OK, Json(gym.into_dto())))
}

/// Soft-delete a gym. Its members and equipment stay in the database.
#[utoipa::path(
    delete,
    path = "/api/gyms/{id}",
    tag = GYM_TAG,
    params(("id" = i32, Path, description = "Gym ID")),
    responses(
        (status = 204, description = "Gym deleted"),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gym(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    if !GymService::new(&state.db).delete(id, owner.id).await? {
        return Err(AppError::not_found("Gym"));
    }

    Ok(StatusCode::NO_CONTENT)
}
