//! Payloads shared by club and event routes.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AvatarDto {
    pub avatar_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ComplaintDto {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatLinkDto {
    pub link: String,
}

/// The caller's membership status after a transition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MembershipStatusDto {
    pub status: String,
}
