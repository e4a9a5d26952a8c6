use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, SignupDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::UpsertUserParam,
        service::user::UserService,
        state::AppState,
    },
};

/// POST /api/auth/signup - Register a user and start a session
///
/// Registering an existing id refreshes the stored profile.
///
/// # Returns
/// - `200 OK`: The stored UserDto
/// - `400 Bad Request`: Empty name
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .signup(UpsertUserParam::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/auth/login - Start a session for a registered user
///
/// # Returns
/// - `200 OK`: The logged in UserDto
/// - `404 Not Found`: No user with that id
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = UserService::new(&state.db).get(payload.id).await? else {
        return Err(AuthError::UserNotInDatabase(payload.id).into());
    };

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/auth/logout - Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// GET /api/auth/user - Get the logged in user
///
/// # Returns
/// - `200 OK`: UserDto of the session user
/// - `401 Unauthorized`: Not logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
