use std::{num::NonZeroU64, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_BRIDGE_TIMEOUT_SECS: u64 = 10;
/// Every five minutes, at second zero.
const DEFAULT_CHAT_BACKFILL_SCHEDULE: &str = "0 */5 * * * *";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Link appended to notification texts.
    pub app_url: String,

    pub discord_bot_token: String,
    /// Guild hosting the per-club and per-event text channels.
    pub discord_guild_id: NonZeroU64,

    pub bridge_timeout: Duration,
    pub chat_backfill_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: required("APP_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: parse("DISCORD_GUILD_ID", &required("DISCORD_GUILD_ID")?)?,
            bridge_timeout: Duration::from_secs(match optional("BRIDGE_TIMEOUT_SECS") {
                Some(value) => parse("BRIDGE_TIMEOUT_SECS", &value)?,
                None => DEFAULT_BRIDGE_TIMEOUT_SECS,
            }),
            chat_backfill_schedule: optional("CHAT_BACKFILL_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_CHAT_BACKFILL_SCHEDULE.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}
