//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It wraps
//! domain-specific errors and implements `IntoResponse` so handlers can use `?`
//! directly. Domain errors (`AuthError`, `MembershipError`, `ChatError`, `BridgeError`)
//! carry their own status code mapping.

pub mod auth;
pub mod bridge;
pub mod config;
pub mod membership;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{
            auth::AuthError,
            bridge::BridgeError,
            config::ConfigError,
            membership::{ChatError, MembershipError},
        },
        model::group::EntityKind,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain-specific errors
/// delegate to their own `IntoResponse`, generic variants map to standard status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing session (401), unknown user (404) or denied access (403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Illegal membership transition, rendered as 409 Conflict.
    #[error(transparent)]
    MembershipErr(#[from] MembershipError),

    /// Chat link requested for an entity whose chat is not provisioned yet.
    #[error(transparent)]
    ChatErr(#[from] ChatError),

    /// Notification bridge failed or timed out, rendered as 502 Bad Gateway.
    #[error(transparent)]
    BridgeErr(#[from] BridgeError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised by the session store setup.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 404 for a club or event id that does not exist.
    pub fn entity_not_found(kind: EntityKind, id: i32) -> Self {
        Self::NotFound(format!("No {kind} with id {id}"))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For domain errors, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::MembershipErr(err) => err.into_response(),
            Self::ChatErr(err) => err.into_response(),
            Self::BridgeErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 Internal Server Error.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
