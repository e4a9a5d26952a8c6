//! Session-based authentication guard.
//!
//! `AuthGuard` resolves the session user and checks the membership permissions a
//! handler requires before any service call runs.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{group::EntityKind, user::User},
    service::authorization::AuthorizationGate,
};

/// A permission on a club or event, identified by kind and id.
pub enum Permission {
    /// Holds the `admin` membership.
    Admin(EntityKind, i32),
    /// Holds `participant` or `admin`.
    Member(EntityKind, i32),
    /// Is the entity's recorded owner.
    Owner(EntityKind, i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user holding every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The session user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AppError::NotFound)` - A permission names a missing entity
    /// - `Err(AuthError::AccessDenied)` - A permission is not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let gate = AuthorizationGate::new(self.db);
        for permission in permissions {
            match *permission {
                Permission::Admin(kind, id) => {
                    gate.require_admin(kind, id, user.id).await?;
                }
                Permission::Member(kind, id) => {
                    gate.require_member(kind, id, user.id).await?;
                }
                Permission::Owner(kind, id) => {
                    gate.require_owner(kind, id, user.id).await?;
                }
            }
        }

        Ok(user)
    }

    /// Resolves the session user without failing for anonymous viewers.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    pub async fn optional_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user)
    }
}
