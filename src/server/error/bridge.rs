use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the external messaging provider.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The call did not finish within the configured bridge timeout.
    #[error("Messaging provider call timed out after {0:?}")]
    Timeout(Duration),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),

    /// The id cannot address a Discord user or channel.
    #[error("Invalid messaging provider id: {0}")]
    InvalidId(i64),

    /// Provider reported an error without a richer type.
    #[error("Messaging provider unavailable: {0}")]
    Unavailable(String),
}

impl From<serenity::Error> for BridgeError {
    fn from(err: serenity::Error) -> Self {
        BridgeError::Discord(Box::new(err))
    }
}

/// Converts bridge failures into 502 Bad Gateway.
///
/// The underlying error is logged; the client only learns the provider is unavailable.
impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        tracing::error!("Notification bridge error: {}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Messaging service unavailable, please try again later".to_string(),
            }),
        )
            .into_response()
    }
}
