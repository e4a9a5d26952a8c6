use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventDto {
    pub id: i32,
    pub club_id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub owner_id: i64,
    pub participants_count: i32,
    pub spectators_count: i32,
    pub event_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// True until the event's group chat has been provisioned.
    pub chat_pending: bool,
    pub created_at: DateTime<Utc>,
}

/// Event with the viewer's membership status embedded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventDetailDto {
    #[serde(flatten)]
    pub event: EventDto,
    pub user_status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateEventDto {
    pub club_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub event_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}
