//! Group chat provisioning.
//!
//! Chats are created after the entity transaction committed. A failed attempt leaves
//! the entity chat pending, and the backfill job picks it up on a later run, least
//! recently attempted first.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    bot::NotificationBridge,
    data::group::GroupRepository,
    error::AppError,
    model::group::{EntityKind, Group},
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    bridge: &'a dyn NotificationBridge,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection, bridge: &'a dyn NotificationBridge) -> Self {
        Self { db, bridge }
    }

    /// Provisions the group chat if it does not exist yet.
    ///
    /// Bridge failures are logged, stamped on the entity and reported as `Ok(None)`.
    /// When another provisioning stored a chat first, the chat created here is removed
    /// and the stored one is returned.
    ///
    /// # Returns
    /// - `Ok(Some(chat_id))` - Chat exists or was just created
    /// - `Ok(None)` - Provider failed, the entity stays chat pending
    /// - `Err(AppError::DbErr)` - Storing the chat id failed
    pub async fn provision(&self, group: &Group) -> Result<Option<i64>, AppError> {
        if let Some(chat_id) = group.chat_id {
            return Ok(Some(chat_id));
        }

        let groups = GroupRepository::new(self.db);

        let chat_id = match self.bridge.provision_chat(&group.name).await {
            Ok(chat_id) => chat_id,
            Err(err) => {
                tracing::warn!(
                    "Failed to provision chat for {} {}, leaving it pending: {}",
                    group.kind,
                    group.id,
                    err
                );
                groups
                    .mark_chat_attempt(group.kind, group.id, Utc::now())
                    .await?;
                return Ok(None);
            }
        };

        if groups.set_chat_id(group.kind, group.id, chat_id).await? {
            tracing::debug!("Provisioned chat {} for {} {}", chat_id, group.kind, group.id);
            return Ok(Some(chat_id));
        }

        let stored = groups
            .find(group.kind, group.id)
            .await?
            .and_then(|current| current.chat_id);

        tracing::warn!(
            "Chat for {} {} was already provisioned, removing duplicate chat {}",
            group.kind,
            group.id,
            chat_id
        );
        if let Err(err) = self.bridge.remove_chat(chat_id).await {
            tracing::warn!("Failed to remove duplicate chat {}: {}", chat_id, err);
        }

        Ok(stored)
    }

    /// Retries provisioning for up to `limit` chat-pending entities of `kind`.
    ///
    /// Returns how many chats were created.
    pub async fn backfill(&self, kind: EntityKind, limit: u64) -> Result<usize, AppError> {
        let pending = GroupRepository::new(self.db).chat_pending(kind, limit).await?;

        let mut provisioned = 0;
        for group in &pending {
            if self.provision(group).await?.is_some() {
                provisioned += 1;
            }
        }

        Ok(provisioned)
    }
}
