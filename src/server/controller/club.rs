use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::club::CreateClubDto,
    server::{
        controller::CursorParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            club::{ClubQuery, CreateClubParams},
            cursor::Cursor,
        },
        service::club::ClubService,
        state::AppState,
    },
};

#[derive(Deserialize, Default)]
pub struct ClubListParams {
    pub id_gt: Option<i64>,
    pub id_lte: Option<i64>,
    pub limit: Option<u64>,
    pub query: Option<String>,
}

/// POST /api/clubs - Create a club
///
/// The caller becomes the club's owner and admin.
///
/// # Returns
/// - `201 Created`: ClubDto, `chat_pending` set while the chat is being provisioned
/// - `400 Bad Request`: Empty name
/// - `401 Unauthorized`: Not logged in
pub async fn create_club(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let club = ClubService::new(&state.db, state.bridge.as_ref())
        .create(CreateClubParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

/// GET /api/clubs - List clubs, newest first
///
/// `query` matches a substring of the club name or of any of its tags.
pub async fn get_clubs(
    State(state): State<AppState>,
    Query(params): Query<ClubListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = ClubQuery {
        cursor: Cursor::new(params.id_gt, params.id_lte, params.limit),
        query: params.query,
    };

    let clubs = ClubService::new(&state.db, state.bridge.as_ref())
        .list(&query)
        .await?;

    let clubs: Vec<_> = clubs.into_iter().map(|club| club.into_dto()).collect();

    Ok((StatusCode::OK, Json(clubs)))
}

/// GET /api/clubs/{id} - Get a club with the viewer's `user_status`
///
/// Anonymous viewers get `unknown`.
pub async fn get_club(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional_user().await?;

    let club = ClubService::new(&state.db, state.bridge.as_ref())
        .get(club_id, viewer.map(|user| user.id))
        .await?;

    Ok((StatusCode::OK, Json(club.into_dto())))
}

/// GET /api/clubs/tags - List tags, most used first
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = ClubService::new(&state.db, state.bridge.as_ref())
        .tags()
        .await?;

    let tags: Vec<_> = tags.into_iter().map(|tag| tag.into_dto()).collect();

    Ok((StatusCode::OK, Json(tags)))
}

/// GET /api/clubs/{id}/events - List the events of a club
pub async fn get_club_events(
    State(state): State<AppState>,
    Path(club_id): Path<i32>,
    Query(params): Query<CursorParams>,
) -> Result<impl IntoResponse, AppError> {
    let events = ClubService::new(&state.db, state.bridge.as_ref())
        .events(club_id, &params.into_cursor())
        .await?;

    let events: Vec<_> = events.into_iter().map(|event| event.into_dto()).collect();

    Ok((StatusCode::OK, Json(events)))
}
