use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        member::{
            CreateMemberDto, ExpiringMemberDto, MemberDto, MembershipFeeDto, RenewMembershipDto,
            UpdateMemberDto,
        },
        user::Role,
    },
    server::{
        controller::{owner_scope, target_gym, GymFilter},
        error::AppError,
        middleware::auth::AuthGuard,
        model::member::{CreateMemberParams, NewFeeParams, UpdateMemberParams},
        service::{member::MemberService, membership::MembershipService},
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a member at one of the caller's gyms.
///
/// Creates the member's user account, the member record and the first fee period
/// together; nothing is stored if any step fails. The gym is `gym_id` from the body,
/// else the gym selected in the session.
///
/// # Access Control
/// - `OWNER`, within the member quota of their plan
///
/// # Returns
/// - `201 Created` - The new member with their first fee
/// - `400 Bad Request` - Invalid fields, email taken, no gym selected, or quota reached
/// - `404 Not Found` - The gym is not one of the caller's
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 400, description = "Invalid member data or quota reached", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym_id = target_gym(&session, payload.gym_id).await?;
    let params = CreateMemberParams::from_dto(gym_id, payload)?;
    let member = MemberService::new(&state.db).create(&owner, params).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto(Utc::now()))))
}

/// List members of the caller's gyms, or of one gym with `?gym_id=`.
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    params(GymFilter),
    responses(
        (status = 200, description = "Members in scope", body = Vec<MemberDto>),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<GymFilter>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym_ids = owner_scope(&state, owner.id, &filter).await?;
    let now = Utc::now();

    let members: Vec<MemberDto> = MemberService::new(&state.db)
        .get_in_gyms(&gym_ids)
        .await?
        .into_iter()
        .map(|m| m.into_dto(now))
        .collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Active members whose latest fee has expired or ends within seven days.
///
/// Expired members are listed first, each group by time to expiry.
#[utoipa::path(
    get,
    path = "/api/members/expiring",
    tag = MEMBER_TAG,
    params(GymFilter),
    responses(
        (status = 200, description = "Members needing renewal", body = Vec<ExpiringMemberDto>),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expiring_members(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<GymFilter>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let gym_ids = owner_scope(&state, owner.id, &filter).await?;

    let members: Vec<ExpiringMemberDto> = MembershipService::new(&state.db)
        .expiring(&gym_ids, Utc::now())
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(members)))
}

#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "The member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let member = MemberService::new(&state.db)
        .get_owned(id, owner.id)
        .await?
        .ok_or_else(|| AppError::not_found("Member"))?;

    Ok((StatusCode::OK, Json(member.into_dto(Utc::now()))))
}

/// Update the member's name, contact details or email.
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Invalid data or email taken", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let params = UpdateMemberParams::from_dto(id, payload)?;
    let member = MemberService::new(&state.db)
        .update(owner.id, params)
        .await?
        .ok_or_else(|| AppError::not_found("Member"))?;

    Ok((StatusCode::OK, Json(member.into_dto(Utc::now()))))
}

#[utoipa::path(
    patch,
    path = "/api/members/{id}/toggle-status",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Status toggled", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_member_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let member = MemberService::new(&state.db)
        .toggle_status(id, owner.id)
        .await?
        .ok_or_else(|| AppError::not_found("Member"))?;

    Ok((StatusCode::OK, Json(member.into_dto(Utc::now()))))
}

#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    if !MemberService::new(&state.db).delete(id, owner.id).await? {
        return Err(AppError::not_found("Member"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Fee history of a member, latest period first.
#[utoipa::path(
    get,
    path = "/api/members/{id}/fees",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Fee periods", body = Vec<MembershipFeeDto>),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member_fees(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let fees: Vec<MembershipFeeDto> = MemberService::new(&state.db)
        .fees(id, owner.id)
        .await?
        .ok_or_else(|| AppError::not_found("Member"))?
        .into_iter()
        .map(|f| f.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(fees)))
}

/// Renew a membership by appending a new fee period.
#[utoipa::path(
    post,
    path = "/api/members/{id}/fees",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    request_body = RenewMembershipDto,
    responses(
        (status = 201, description = "Fee period added", body = MembershipFeeDto),
        (status = 400, description = "Invalid amount or dates", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn renew_membership(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RenewMembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Role::Owner])
        .await?;

    let params = NewFeeParams::from_renew_dto(payload)?;
    let fee = MemberService::new(&state.db)
        .renew(id, owner.id, params)
        .await?
        .ok_or_else(|| AppError::not_found("Member"))?;

    Ok((StatusCode::CREATED, Json(fee.into_dto())))
}
