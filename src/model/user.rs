use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub avatar_url: String,
}

/// Registration payload; `id` is the user's Discord id.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignupDto {
    pub id: i64,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub id: i64,
}
