use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::server::{
    controller::CursorParams,
    error::AppError,
    middleware::auth::AuthGuard,
    model::{group::EntityKind, membership::MembershipStatus},
    service::user::UserService,
    state::AppState,
};

fn held_status(kind: EntityKind, status: &str) -> Result<MembershipStatus, AppError> {
    MembershipStatus::parse_held(kind, status).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown member status '{status}' for a {kind}"))
    })
}

/// GET /api/users/{id}/clubs/{status} - Clubs where the user is admin, participant or subscriber
///
/// # Returns
/// - `200 OK`: JSON array of ClubDto, empty for unknown users
/// - `400 Bad Request`: Status other than `admin`, `participant` or `subscriber`
pub async fn get_user_clubs(
    State(state): State<AppState>,
    Path((user_id, status)): Path<(i64, String)>,
    Query(params): Query<CursorParams>,
) -> Result<impl IntoResponse, AppError> {
    let status = held_status(EntityKind::Club, &status)?;

    let clubs = UserService::new(&state.db)
        .clubs_of(user_id, status, &params.into_cursor())
        .await?;

    let clubs: Vec<_> = clubs.into_iter().map(|club| club.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs)))
}

/// GET /api/users/{id}/events/{status} - Events where the user is admin, participant or spectator
///
/// # Returns
/// - `200 OK`: JSON array of EventDto, empty for unknown users
/// - `400 Bad Request`: Status other than `admin`, `participant` or `spectator`
pub async fn get_user_events(
    State(state): State<AppState>,
    Path((user_id, status)): Path<(i64, String)>,
    Query(params): Query<CursorParams>,
) -> Result<impl IntoResponse, AppError> {
    let status = held_status(EntityKind::Event, &status)?;

    let events = UserService::new(&state.db)
        .events_of(user_id, status, &params.into_cursor())
        .await?;

    let events: Vec<_> = events.into_iter().map(|event| event.into_dto()).collect();

    Ok((StatusCode::OK, Json(events)))
}

/// GET /api/users/own_clubs - Clubs the caller administers
///
/// # Returns
/// - `200 OK`: JSON array of ClubDto
/// - `401 Unauthorized`: Not logged in
pub async fn get_own_clubs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CursorParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let clubs = UserService::new(&state.db)
        .clubs_of(user.id, MembershipStatus::Admin, &params.into_cursor())
        .await?;

    let clubs: Vec<_> = clubs.into_iter().map(|club| club.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs)))
}
