use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::event::CreateEventDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            cursor::Cursor,
            event::{CreateEventParams, EventQuery, GeoBounds},
            group::EntityKind,
        },
        service::event::EventService,
        state::AppState,
    },
};

#[derive(Deserialize, Default)]
pub struct EventListParams {
    pub id_gt: Option<i64>,
    pub id_lte: Option<i64>,
    pub limit: Option<u64>,
    pub query: Option<String>,
    pub min_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lat: Option<f64>,
    pub max_lng: Option<f64>,
}

/// POST /api/events - Create an event for a club
///
/// # Access Control
/// - Caller must be the admin of `club_id`
///
/// # Returns
/// - `201 Created`: EventDto
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Caller is not the club admin
/// - `404 Not Found`: Club does not exist
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin(EntityKind::Club, payload.club_id)])
        .await?;

    let event = EventService::new(&state.db, state.bridge.as_ref())
        .create(CreateEventParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// GET /api/events - List events, newest first
///
/// The bounding box applies only when all four bounds are given.
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = EventQuery {
        cursor: Cursor::new(params.id_gt, params.id_lte, params.limit),
        query: params.query,
        bounds: GeoBounds::from_parts(
            params.min_lat,
            params.min_lng,
            params.max_lat,
            params.max_lng,
        ),
    };

    let events = EventService::new(&state.db, state.bridge.as_ref())
        .list(&query)
        .await?;

    let events: Vec<_> = events.into_iter().map(|event| event.into_dto()).collect();

    Ok((StatusCode::OK, Json(events)))
}

/// GET /api/events/{id} - Get an event with the viewer's `user_status`
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional_user().await?;

    let event = EventService::new(&state.db, state.bridge.as_ref())
        .get(event_id, viewer.map(|user| user.id))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}
