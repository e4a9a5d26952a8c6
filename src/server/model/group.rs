//! Entity kinds and the kind-agnostic view of a club or event.
//!
//! Clubs and events share one membership engine. The engine only needs a handful of
//! attributes from either (name for notification texts, owner for deletion rights and
//! the chat id), which are carried by [`Group`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest club or event name, in characters. Names double as chat channel titles,
/// which the messaging provider caps at this length.
pub const MAX_NAME_CHARS: usize = 100;

/// The kind of group-like entity a membership attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Club,
    Event,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Club => "club",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-level selector for an [`EntityKind`].
///
/// Lets one generic handler serve both `/api/clubs/...` and `/api/events/...` routes.
pub trait GroupKind: Send + Sync + 'static {
    const KIND: EntityKind;
}

pub struct ClubKind;

impl GroupKind for ClubKind {
    const KIND: EntityKind = EntityKind::Club;
}

pub struct EventKind;

impl GroupKind for EventKind {
    const KIND: EntityKind = EntityKind::Event;
}

/// Kind-agnostic attributes of a club or event.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: EntityKind,
    pub id: i32,
    pub name: String,
    pub owner_id: i64,
    /// `None` while the group chat is still being provisioned.
    pub chat_id: Option<i64>,
    /// Parent club of an event, `None` for clubs.
    pub parent_club_id: Option<i32>,
}

impl Group {
    pub fn from_club(entity: entity::club::Model) -> Self {
        Self {
            kind: EntityKind::Club,
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            chat_id: entity.chat_id,
            parent_club_id: None,
        }
    }

    pub fn from_event(entity: entity::event::Model) -> Self {
        Self {
            kind: EntityKind::Event,
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            chat_id: entity.chat_id,
            parent_club_id: Some(entity.club_id),
        }
    }

    /// Ownership is fixed at creation and never follows the admin role.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}
