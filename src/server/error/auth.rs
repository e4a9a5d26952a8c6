use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i64),

    /// The user is authenticated but lacks the required membership status.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, never returned.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i64, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while keeping client-facing messages
/// generic.
///
/// # Returns
/// - 401 Unauthorized - For `UserNotInSession`
/// - 403 Forbidden - For `AccessDenied`
/// - 404 Not Found - For `UserNotInDatabase`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to do that",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
