//! Membership routes shared by clubs and events.
//!
//! Every handler is generic over [`GroupKind`] and mounted once per kind, e.g.
//! `post(leave::<ClubKind>)` under `/api/clubs/{id}/leave`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::group::{AvatarDto, ChatLinkDto, ComplaintDto, MembershipStatusDto},
    server::{
        controller::CursorParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            complaint::CreateComplaintParams,
            group::GroupKind,
            membership::{Decision, MembershipStatus},
        },
        service::{
            complaint::ComplaintService, group::GroupService, membership::MembershipService,
        },
        state::AppState,
    },
};

fn status_dto<K: GroupKind>(status: MembershipStatus) -> Json<MembershipStatusDto> {
    Json(MembershipStatusDto {
        status: status.as_str(K::KIND).to_string(),
    })
}

/// POST /api/{clubs|events}/{id}/participate - Request to participate
///
/// # Returns
/// - `200 OK`: `{"status": "participant_request"}`
/// - `409 Conflict`: Caller already participates or administers
/// - `502 Bad Gateway`: Request stored but the owner could not be notified
pub async fn request_join<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = MembershipService::new(&state.db, state.bridge.as_ref(), &state.app_url)
        .request_join(K::KIND, entity_id, user.id)
        .await?;

    Ok((StatusCode::OK, status_dto::<K>(status)))
}

/// POST /api/clubs/{id}/subscribe, POST /api/events/{id}/spectate
///
/// # Returns
/// - `200 OK`: `{"status": "subscriber"}` or `{"status": "spectator"}`
/// - `409 Conflict`: Caller is the admin
pub async fn follow<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = MembershipService::new(&state.db, state.bridge.as_ref(), &state.app_url)
        .follow(K::KIND, entity_id, user.id)
        .await?;

    Ok((StatusCode::OK, status_dto::<K>(status)))
}

/// POST /api/{clubs|events}/{id}/participate/{uid}/{approve|reject}
///
/// # Returns
/// - `200 OK`: The target's new status
/// - `403 Forbidden`: Caller is not the admin
/// - `404 Not Found`: Target has no membership row
/// - `409 Conflict`: Target has no pending request
pub async fn resolve_request<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path((entity_id, target_user_id, decision)): Path<(i32, i64, Decision)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = MembershipService::new(&state.db, state.bridge.as_ref(), &state.app_url)
        .resolve_request(K::KIND, entity_id, user.id, target_user_id, decision)
        .await?;

    Ok((StatusCode::OK, status_dto::<K>(status)))
}

/// GET /api/{clubs|events}/{id}/members/{status} - List members by status
///
/// `participant_request` listings are restricted to the admin.
///
/// # Returns
/// - `200 OK`: JSON array of UserDto
/// - `400 Bad Request`: Unknown or unlistable status for this kind
/// - `401 Unauthorized`: Pending requests listed without a session
/// - `403 Forbidden`: Pending requests listed by a non-admin
pub async fn get_members<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path((entity_id, status)): Path<(i32, String)>,
    Query(params): Query<CursorParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(status) = MembershipStatus::parse_listable(K::KIND, &status) else {
        return Err(AppError::BadRequest(format!(
            "Unknown member status '{}' for a {}",
            status,
            K::KIND
        )));
    };

    let viewer = AuthGuard::new(&state.db, &session).optional_user().await?;

    let members = MembershipService::new(&state.db, state.bridge.as_ref(), &state.app_url)
        .list_members(
            K::KIND,
            entity_id,
            viewer.map(|user| user.id),
            status,
            &params.into_cursor(),
        )
        .await?;

    let members: Vec<_> = members.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// POST /api/{clubs|events}/{id}/leave - Remove the caller's membership
///
/// # Returns
/// - `204 No Content`: Membership removed
/// - `404 Not Found`: Caller has no membership row
/// - `409 Conflict`: Caller is the admin
pub async fn leave<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MembershipService::new(&state.db, state.bridge.as_ref(), &state.app_url)
        .leave(K::KIND, entity_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/{clubs|events}/{id}/delete - Delete the entity
///
/// # Access Control
/// - Caller must be the entity's owner
pub async fn delete_entity<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(K::KIND, entity_id)])
        .await?;

    MembershipService::new(&state.db, state.bridge.as_ref(), &state.app_url)
        .delete_entity(K::KIND, entity_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/{clubs|events}/{id}/chat_link - Invite link to the group chat
///
/// # Returns
/// - `200 OK`: ChatLinkDto
/// - `403 Forbidden`: Caller does not participate
/// - `409 Conflict`: Chat not provisioned yet
/// - `502 Bad Gateway`: Provider failed to create the invite
pub async fn chat_link<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(K::KIND, entity_id)])
        .await?;

    let link = MembershipService::new(&state.db, state.bridge.as_ref(), &state.app_url)
        .chat_link(K::KIND, entity_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(ChatLinkDto { link })))
}

/// PUT /api/{clubs|events}/{id}/avatar - Replace the avatar url
///
/// # Access Control
/// - Caller must be the entity's owner
pub async fn update_avatar<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<i32>,
    Json(payload): Json<AvatarDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(K::KIND, entity_id)])
        .await?;

    GroupService::new(&state.db)
        .update_avatar(K::KIND, entity_id, user.id, payload.avatar_url)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/{clubs|events}/{id}/complain - File a complaint
pub async fn complain<K: GroupKind>(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<i32>,
    Json(payload): Json<ComplaintDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ComplaintService::new(&state.db)
        .create(CreateComplaintParams {
            user_id: user.id,
            kind: K::KIND,
            target_id: entity_id,
            text: payload.text,
        })
        .await?;

    Ok(StatusCode::CREATED)
}
