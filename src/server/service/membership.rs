//! Membership engine for clubs and events.
//!
//! Every operation takes the entity kind and the acting user explicitly. Membership
//! writes and the counter refresh they imply share one transaction; notifications and
//! chat calls run only after that transaction committed, so a bridge failure never
//! rolls back a status change.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    bot::NotificationBridge,
    data::{
        club::ClubRepository, group::GroupRepository, membership::MembershipRepository,
    },
    error::{
        auth::AuthError,
        membership::{ChatError, MembershipError},
        AppError,
    },
    model::{
        cursor::Cursor,
        group::{EntityKind, Group},
        membership::{Decision, MembershipStatus},
        user::UserSummary,
    },
    service::authorization::AuthorizationGate,
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
    bridge: &'a dyn NotificationBridge,
    app_url: &'a str,
}

impl<'a> MembershipService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        bridge: &'a dyn NotificationBridge,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            bridge,
            app_url,
        }
    }

    /// Makes the creator the admin of a freshly inserted entity.
    ///
    /// Runs inside the creation transaction and refreshes the entity counters there.
    pub async fn grant_creator_admin<C: ConnectionTrait>(
        txn: &C,
        kind: EntityKind,
        entity_id: i32,
        creator_id: i64,
    ) -> Result<(), DbErr> {
        MembershipRepository::new(txn)
            .upsert(kind, entity_id, creator_id, MembershipStatus::Admin)
            .await?;
        GroupRepository::new(txn)
            .refresh_member_counts(kind, entity_id)
            .await
    }

    /// Status of `user_id` on the entity, `None` without a row.
    pub async fn get_status(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<Option<MembershipStatus>, AppError> {
        let status = MembershipRepository::new(self.db)
            .get_status(kind, entity_id, user_id)
            .await?;

        Ok(status)
    }

    /// Files a participation request and notifies the entity owner.
    ///
    /// # Returns
    /// - `Ok(MembershipStatus::ParticipantRequest)` - Request stored and owner notified
    /// - `Err(AppError::NotFound)` - No entity with that id
    /// - `Err(MembershipError::AlreadyElevated)` - Caller already participates or administers
    /// - `Err(AppError::BridgeErr)` - Request stored but the owner could not be notified
    pub async fn request_join(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<MembershipStatus, AppError> {
        let group = self.find_group(kind, entity_id).await?;

        let txn = self.db.begin().await?;
        let members = MembershipRepository::new(&txn);

        if let Some(current) = members.get_status(kind, entity_id, user_id).await? {
            if current.is_elevated() {
                return Err(MembershipError::AlreadyElevated {
                    kind,
                    entity_id,
                    user_id,
                }
                .into());
            }
        }

        members
            .upsert(
                kind,
                entity_id,
                user_id,
                MembershipStatus::ParticipantRequest,
            )
            .await?;
        GroupRepository::new(&txn)
            .refresh_member_counts(kind, entity_id)
            .await?;
        txn.commit().await?;

        tracing::debug!("User {} requested to participate in {} {}", user_id, kind, entity_id);

        let text = format!(
            "A new user wants to participate in {}: {}",
            group.name, self.app_url
        );
        self.bridge.notify(group.owner_id, &text).await?;

        Ok(MembershipStatus::ParticipantRequest)
    }

    /// Subscribes to a club or spectates an event.
    ///
    /// Idempotent. Participants and pending requesters step down to follower.
    pub async fn follow(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<MembershipStatus, AppError> {
        self.find_group(kind, entity_id).await?;

        let txn = self.db.begin().await?;
        let members = MembershipRepository::new(&txn);

        if members.get_status(kind, entity_id, user_id).await? == Some(MembershipStatus::Admin) {
            return Err(MembershipError::AdminCannotFollow { kind, entity_id }.into());
        }

        members
            .upsert(kind, entity_id, user_id, MembershipStatus::Follower)
            .await?;
        GroupRepository::new(&txn)
            .refresh_member_counts(kind, entity_id)
            .await?;
        txn.commit().await?;

        Ok(MembershipStatus::Follower)
    }

    /// Approves or rejects a pending participation request.
    ///
    /// Reject keeps the target as a follower instead of removing them.
    ///
    /// # Returns
    /// - `Ok(MembershipStatus)` - The target's new status
    /// - `Err(AppError::NotFound)` - No such entity, or the target has no row
    /// - `Err(AuthError::AccessDenied)` - Acting user is not the admin
    /// - `Err(MembershipError::NotRequested)` - Target has no pending request
    /// - `Err(AppError::BridgeErr)` - Decision stored but the target could not be notified
    pub async fn resolve_request(
        &self,
        kind: EntityKind,
        entity_id: i32,
        acting_user_id: i64,
        target_user_id: i64,
        decision: Decision,
    ) -> Result<MembershipStatus, AppError> {
        let group = AuthorizationGate::new(self.db)
            .require_admin(kind, entity_id, acting_user_id)
            .await?;

        let txn = self.db.begin().await?;
        let members = MembershipRepository::new(&txn);

        match members.get_status(kind, entity_id, target_user_id).await? {
            Some(MembershipStatus::ParticipantRequest) => {}
            Some(_) => {
                return Err(MembershipError::NotRequested {
                    kind,
                    entity_id,
                    user_id: target_user_id,
                }
                .into())
            }
            None => {
                return Err(AppError::NotFound(format!(
                    "User {target_user_id} is not a member of {kind} {entity_id}"
                )))
            }
        }

        let resolved = decision.resolved_status();
        members
            .upsert(kind, entity_id, target_user_id, resolved)
            .await?;
        GroupRepository::new(&txn)
            .refresh_member_counts(kind, entity_id)
            .await?;
        txn.commit().await?;

        let text = match decision {
            Decision::Approve => format!(
                "The administrator accepted you into {}: {}",
                group.name, self.app_url
            ),
            Decision::Reject => format!(
                "Unfortunately the administrator declined your request to participate in {}: {}",
                group.name, self.app_url
            ),
        };
        self.bridge.notify(target_user_id, &text).await?;

        Ok(resolved)
    }

    /// Removes the caller's membership row.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted and counters refreshed
    /// - `Err(AppError::NotFound)` - No such entity, or the caller has no row
    /// - `Err(MembershipError::AdminCannotLeave)` - Caller is the admin
    pub async fn leave(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<(), AppError> {
        self.find_group(kind, entity_id).await?;

        let txn = self.db.begin().await?;
        let members = MembershipRepository::new(&txn);

        match members.get_status(kind, entity_id, user_id).await? {
            None => {
                return Err(AppError::NotFound(format!(
                    "User {user_id} is not a member of {kind} {entity_id}"
                )))
            }
            Some(MembershipStatus::Admin) => {
                return Err(MembershipError::AdminCannotLeave { kind, entity_id }.into())
            }
            Some(_) => {}
        }

        members.delete(kind, entity_id, user_id).await?;
        GroupRepository::new(&txn)
            .refresh_member_counts(kind, entity_id)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    /// Lists members holding `status`.
    ///
    /// Pending requests are only visible to the admin.
    pub async fn list_members(
        &self,
        kind: EntityKind,
        entity_id: i32,
        viewer: Option<i64>,
        status: MembershipStatus,
        cursor: &Cursor,
    ) -> Result<Vec<UserSummary>, AppError> {
        if status == MembershipStatus::Admin {
            return Err(AppError::BadRequest(format!(
                "Members of a {kind} cannot be listed by admin status"
            )));
        }

        if status == MembershipStatus::ParticipantRequest {
            let Some(viewer) = viewer else {
                return Err(AuthError::UserNotInSession.into());
            };
            AuthorizationGate::new(self.db)
                .require_admin(kind, entity_id, viewer)
                .await?;
        } else {
            self.find_group(kind, entity_id).await?;
        }

        let users = MembershipRepository::new(self.db)
            .list_users(kind, entity_id, status, cursor)
            .await?;

        Ok(users)
    }

    /// Deletes the entity with its memberships. Owner only.
    ///
    /// Refreshes the parent club's event count for events and the tag usage for clubs.
    pub async fn delete_entity(
        &self,
        kind: EntityKind,
        entity_id: i32,
        acting_user_id: i64,
    ) -> Result<(), AppError> {
        let group = AuthorizationGate::new(self.db)
            .require_owner(kind, entity_id, acting_user_id)
            .await?;

        let txn = self.db.begin().await?;
        let clubs = ClubRepository::new(&txn);

        let tag_ids = match kind {
            EntityKind::Club => clubs.tag_ids(entity_id).await?,
            EntityKind::Event => Vec::new(),
        };

        GroupRepository::new(&txn).delete(kind, entity_id).await?;

        match group.parent_club_id {
            Some(club_id) => clubs.refresh_events_count(club_id).await?,
            None => clubs.refresh_tag_usage(&tag_ids).await?,
        }
        txn.commit().await?;

        tracing::info!("User {} deleted {} {}", acting_user_id, kind, entity_id);

        Ok(())
    }

    /// Invite link to the entity's group chat. Participants and admin only.
    ///
    /// # Returns
    /// - `Ok(String)` - Fresh invite url
    /// - `Err(AuthError::AccessDenied)` - Caller does not participate
    /// - `Err(ChatError::NoChat)` - The chat is still being provisioned
    /// - `Err(AppError::BridgeErr)` - The provider failed to create the invite
    pub async fn chat_link(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<String, AppError> {
        let group = AuthorizationGate::new(self.db)
            .require_member(kind, entity_id, user_id)
            .await?;

        let Some(chat_id) = group.chat_id else {
            return Err(ChatError::NoChat(kind).into());
        };

        let link = self.bridge.invite_link(chat_id).await?;

        Ok(link)
    }

    async fn find_group(&self, kind: EntityKind, entity_id: i32) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find(kind, entity_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(kind, entity_id))
    }
}
