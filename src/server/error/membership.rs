use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::group::EntityKind};

/// Illegal membership transitions.
///
/// All variants render as 409 Conflict.
#[derive(Error, Debug)]
pub enum MembershipError {
    /// Participation requested by a user who already participates or administers.
    #[error("User {user_id} already participates in {kind} {entity_id}")]
    AlreadyElevated {
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    },

    /// Approve or reject targeted a user without a pending request.
    #[error("User {user_id} has no pending request for {kind} {entity_id}")]
    NotRequested {
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    },

    /// The admin tried to leave; the only way out is deleting the entity.
    #[error("The admin of {kind} {entity_id} cannot leave it")]
    AdminCannotLeave { kind: EntityKind, entity_id: i32 },

    /// The admin tried to downgrade to a passive follower.
    #[error("The admin of {kind} {entity_id} cannot become a follower")]
    AdminCannotFollow { kind: EntityKind, entity_id: i32 },
}

impl IntoResponse for MembershipError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Error, Debug)]
pub enum ChatError {
    /// The entity has no provisioned chat yet.
    ///
    /// Results in 409 Conflict, distinct from bridge failures (502).
    #[error("No chat for this {0} yet")]
    NoChat(EntityKind),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
