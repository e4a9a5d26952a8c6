//! Role-based authorization derived from membership status.
//!
//! The gate never stores roles of its own. Every check reads the caller's membership
//! row, except [`AuthorizationGate::require_owner`] which compares against the entity's
//! `owner_id` column.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{group::GroupRepository, membership::MembershipRepository},
    error::{auth::AuthError, AppError},
    model::{
        group::{EntityKind, Group},
        membership::MembershipStatus,
    },
};

pub struct AuthorizationGate<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthorizationGate<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn status(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<Option<MembershipStatus>, DbErr> {
        MembershipRepository::new(self.db)
            .get_status(kind, entity_id, user_id)
            .await
    }

    pub async fn is_admin(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<bool, DbErr> {
        let status = self.status(kind, entity_id, user_id).await?;
        Ok(status == Some(MembershipStatus::Admin))
    }

    /// Participant or admin.
    pub async fn is_member(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<bool, DbErr> {
        let status = self.status(kind, entity_id, user_id).await?;
        Ok(status.is_some_and(MembershipStatus::is_member))
    }

    /// Requires `user_id` to hold `admin` on the entity.
    ///
    /// # Returns
    /// - `Ok(Group)` - The entity, caller is its admin
    /// - `Err(AppError::NotFound)` - No entity with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is not the admin
    pub async fn require_admin(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<Group, AppError> {
        let group = self.require_entity(kind, entity_id).await?;

        if !self.is_admin(kind, entity_id, user_id).await? {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("requires admin of {kind} {entity_id}"),
            )
            .into());
        }

        Ok(group)
    }

    /// Requires `user_id` to participate in or administer the entity.
    pub async fn require_member(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<Group, AppError> {
        let group = self.require_entity(kind, entity_id).await?;

        if !self.is_member(kind, entity_id, user_id).await? {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("requires participation in {kind} {entity_id}"),
            )
            .into());
        }

        Ok(group)
    }

    /// Requires `user_id` to be the entity's owner.
    ///
    /// # Returns
    /// - `Ok(Group)` - The entity, caller is its owner
    /// - `Err(AppError::NotFound)` - No entity with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is not the owner
    pub async fn require_owner(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<Group, AppError> {
        let group = self.require_entity(kind, entity_id).await?;

        if !group.is_owned_by(user_id) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("requires ownership of {kind} {entity_id}"),
            )
            .into());
        }

        Ok(group)
    }

    async fn require_entity(&self, kind: EntityKind, entity_id: i32) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find(kind, entity_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(kind, entity_id))
    }
}
