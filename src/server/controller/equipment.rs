use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        equipment::{CreateEquipmentDto, EquipmentDto, UpdateEquipmentDto},
        user::Role,
    },
    server::{
        controller::{owner_scope, target_gym, GymFilter},
        error::AppError,
        middleware::auth::AuthGuard,
        model::equipment::{CreateEquipmentParams, UpdateEquipmentParams},
        service::equipment::EquipmentService,
        state::AppState,
    },
};

/// Tag for grouping equipment endpoints in OpenAPI documentation
pub static EQUIPMENT_TAG: &str = "equipment";

/// Add equipment to one of the caller's gyms.
///
/// The gym is `gym_id` from the body, else the gym selected in the session.
#[utoipa::path(
    post,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    request_body = CreateEquipmentDto,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDto),
        (status = 400, description = "Invalid data, no gym selected, or quota reached", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym_id = target_gym(&session, payload.gym_id).await?;
    let params = CreateEquipmentParams::from_dto(gym_id, payload)?;
    let equipment = EquipmentService::new(&state.db).create(&owner, params).await?;

    Ok((StatusCode::CREATED, Json(equipment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    params(GymFilter),
    responses(
        (status = 200, description = "Equipment in scope", body = Vec<EquipmentDto>),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_list(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<GymFilter>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym_ids = owner_scope(&state, owner.id, &filter).await?;

    let equipment: Vec<EquipmentDto> = EquipmentService::new(&state.db)
        .get_in_gyms(&gym_ids)
        .await?
        .into_iter()
        .map(|e| e.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(equipment)))
}

#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "The equipment", body = EquipmentDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let equipment = EquipmentService::new(&state.db)
        .get_owned(id, owner.id)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment"))?;

    Ok((StatusCode::OK, Json(equipment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipmentDto,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDto),
        (status = 400, description = "Invalid equipment data", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let params = UpdateEquipmentParams::from_dto(id, payload)?;
    let equipment = EquipmentService::new(&state.db)
        .update(owner.id, params)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment"))?;

    Ok((StatusCode::OK, Json(equipment.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/equipment/{id}/toggle-status",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Status toggled", body = EquipmentDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_equipment_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let equipment = EquipmentService::new(&state.db)
        .toggle_status(id, owner.id)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment"))?;

    Ok((StatusCode::OK, Json(equipment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    if !EquipmentService::new(&state.db).delete(id, owner.id).await? {
        return Err(AppError::not_found("Equipment"));
    }

    Ok(StatusCode::NO_CONTENT)
}
