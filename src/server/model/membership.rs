//! Membership statuses and decisions.
//!
//! Clubs and events store their statuses in separate typed columns
//! ([`ClubMemberStatus`], [`EventMemberStatus`]). The engine works on
//! [`MembershipStatus`], where the passive follower status is a single variant
//! rendered as `subscriber` for clubs and `spectator` for events. A spectator on a
//! club cannot be expressed.

use entity::{club_member::ClubMemberStatus, event_member::EventMemberStatus};
use serde::Deserialize;

use crate::server::model::group::EntityKind;

/// Rendered status for viewers without a membership row or without a session.
pub const UNKNOWN_STATUS: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipStatus {
    Admin,
    Participant,
    ParticipantRequest,
    /// `subscriber` on a club, `spectator` on an event.
    Follower,
}

impl MembershipStatus {
    /// Statuses that block a new participation request.
    pub fn is_elevated(self) -> bool {
        matches!(self, Self::Admin | Self::Participant)
    }

    /// Participant or admin.
    pub fn is_member(self) -> bool {
        matches!(self, Self::Admin | Self::Participant)
    }

    pub fn as_str(self, kind: EntityKind) -> &'static str {
        match (self, kind) {
            (Self::Admin, _) => "admin",
            (Self::Participant, _) => "participant",
            (Self::ParticipantRequest, _) => "participant_request",
            (Self::Follower, EntityKind::Club) => "subscriber",
            (Self::Follower, EntityKind::Event) => "spectator",
        }
    }

    /// Parses a persisted status name for the given kind.
    ///
    /// `subscriber` is only valid for clubs and `spectator` only for events.
    pub fn parse(kind: EntityKind, value: &str) -> Option<Self> {
        match (value, kind) {
            ("admin", _) => Some(Self::Admin),
            ("participant", _) => Some(Self::Participant),
            ("participant_request", _) => Some(Self::ParticipantRequest),
            ("subscriber", EntityKind::Club) => Some(Self::Follower),
            ("spectator", EntityKind::Event) => Some(Self::Follower),
            _ => None,
        }
    }

    /// Statuses that may be used to list members; the admin is never listed by status.
    pub fn parse_listable(kind: EntityKind, value: &str) -> Option<Self> {
        Self::parse(kind, value).filter(|status| *status != Self::Admin)
    }

    /// Statuses a user can be listed under on their own profile. Pending requests stay
    /// private to the entity's admins.
    pub fn parse_held(kind: EntityKind, value: &str) -> Option<Self> {
        Self::parse(kind, value).filter(|status| *status != Self::ParticipantRequest)
    }

    /// Renders an optional status, mapping "no row" to `unknown`.
    pub fn render(status: Option<Self>, kind: EntityKind) -> &'static str {
        status.map_or(UNKNOWN_STATUS, |status| status.as_str(kind))
    }

    pub fn from_club(status: ClubMemberStatus) -> Self {
        match status {
            ClubMemberStatus::Admin => Self::Admin,
            ClubMemberStatus::Participant => Self::Participant,
            ClubMemberStatus::ParticipantRequest => Self::ParticipantRequest,
            ClubMemberStatus::Subscriber => Self::Follower,
        }
    }

    pub fn into_club(self) -> ClubMemberStatus {
        match self {
            Self::Admin => ClubMemberStatus::Admin,
            Self::Participant => ClubMemberStatus::Participant,
            Self::ParticipantRequest => ClubMemberStatus::ParticipantRequest,
            Self::Follower => ClubMemberStatus::Subscriber,
        }
    }

    pub fn from_event(status: EventMemberStatus) -> Self {
        match status {
            EventMemberStatus::Admin => Self::Admin,
            EventMemberStatus::Participant => Self::Participant,
            EventMemberStatus::ParticipantRequest => Self::ParticipantRequest,
            EventMemberStatus::Spectator => Self::Follower,
        }
    }

    pub fn into_event(self) -> EventMemberStatus {
        match self {
            Self::Admin => EventMemberStatus::Admin,
            Self::Participant => EventMemberStatus::Participant,
            Self::ParticipantRequest => EventMemberStatus::ParticipantRequest,
            Self::Follower => EventMemberStatus::Spectator,
        }
    }
}

/// Admin decision on a pending participation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Status the requester ends up with. Reject keeps the user as a follower.
    pub fn resolved_status(self) -> MembershipStatus {
        match self {
            Self::Approve => MembershipStatus::Participant,
            Self::Reject => MembershipStatus::Follower,
        }
    }
}
