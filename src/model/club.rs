use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub owner_id: i64,
    pub tags: Vec<String>,
    pub participants_count: i32,
    pub subscribers_count: i32,
    pub events_count: i32,
    /// True until the club's group chat has been provisioned.
    pub chat_pending: bool,
    pub created_at: DateTime<Utc>,
}

/// Club with the viewer's membership status embedded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClubDetailDto {
    #[serde(flatten)]
    pub club: ClubDto,
    pub user_status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateClubDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub usage_count: i32,
}
