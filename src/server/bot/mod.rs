//! Messaging provider integration.
//!
//! The membership engine talks to the provider only through [`NotificationBridge`]:
//! direct notifications to users and one group chat per club or event. The production
//! implementation is [`discord::DiscordBridge`].

pub mod discord;

use serenity::async_trait;

use crate::server::error::bridge::BridgeError;

#[async_trait]
pub trait NotificationBridge: Send + Sync {
    /// Delivers `text` to the user as a direct message.
    async fn notify(&self, user_id: i64, text: &str) -> Result<(), BridgeError>;

    /// Creates a group chat named `title` and returns its id.
    async fn provision_chat(&self, title: &str) -> Result<i64, BridgeError>;

    /// Deletes a chat that was provisioned but lost to a concurrent provisioning.
    async fn remove_chat(&self, chat_id: i64) -> Result<(), BridgeError>;

    /// Returns a fresh invite link for the chat.
    async fn invite_link(&self, chat_id: i64) -> Result<String, BridgeError>;
}
