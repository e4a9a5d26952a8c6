use std::{future::Future, num::NonZeroU64, sync::Arc, time::Duration};

use serenity::{
    all::{ChannelId, ChannelType, CreateChannel, CreateInvite, CreateMessage, GuildId, UserId},
    async_trait,
    http::Http,
};

use crate::server::{bot::NotificationBridge, error::bridge::BridgeError};

/// Invite links stay valid for a day.
const INVITE_MAX_AGE_SECS: u32 = 24 * 60 * 60;

/// Discord implementation of [`NotificationBridge`].
///
/// Notifications are direct messages, group chats are text channels in a single
/// configured guild. Every call is bounded by `timeout`.
pub struct DiscordBridge {
    http: Arc<Http>,
    guild_id: GuildId,
    timeout: Duration,
}

impl DiscordBridge {
    pub fn new(http: Arc<Http>, guild_id: NonZeroU64, timeout: Duration) -> Self {
        Self {
            http,
            guild_id: GuildId::from(guild_id),
            timeout,
        }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, BridgeError>
    where
        F: Future<Output = Result<T, serenity::Error>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(BridgeError::from),
            Err(_) => Err(BridgeError::Timeout(self.timeout)),
        }
    }
}

/// Converts a stored id into a non-zero Discord snowflake.
fn snowflake(id: i64) -> Result<u64, BridgeError> {
    u64::try_from(id)
        .ok()
        .filter(|id| *id != 0)
        .ok_or(BridgeError::InvalidId(id))
}

#[async_trait]
impl NotificationBridge for DiscordBridge {
    async fn notify(&self, user_id: i64, text: &str) -> Result<(), BridgeError> {
        let user_id = UserId::new(snowflake(user_id)?);
        let http = &self.http;

        self.bounded(async move {
            let channel = user_id.create_dm_channel(http).await?;
            channel
                .id
                .send_message(http, CreateMessage::new().content(text))
                .await?;
            Ok(())
        })
        .await
    }

    async fn provision_chat(&self, title: &str) -> Result<i64, BridgeError> {
        let builder = CreateChannel::new(title).kind(ChannelType::Text);

        let channel = self
            .bounded(self.guild_id.create_channel(&self.http, builder))
            .await?;

        tracing::debug!("Provisioned chat channel {} for '{}'", channel.id, title);

        i64::try_from(channel.id.get())
            .map_err(|_| BridgeError::Unavailable(format!("channel id {} out of range", channel.id)))
    }

    async fn remove_chat(&self, chat_id: i64) -> Result<(), BridgeError> {
        let channel_id = ChannelId::new(snowflake(chat_id)?);

        self.bounded(channel_id.delete(&self.http)).await?;

        Ok(())
    }

    async fn invite_link(&self, chat_id: i64) -> Result<String, BridgeError> {
        let channel_id = ChannelId::new(snowflake(chat_id)?);
        let builder = CreateInvite::new()
            .max_age(INVITE_MAX_AGE_SECS)
            .unique(true);

        let invite = self
            .bounded(channel_id.create_invite(&self.http, builder))
            .await?;

        Ok(invite.url())
    }
}
