//! Type-safe session wrapper.
//!
//! The session only ever carries the authenticated user's numeric id. Wrapping the raw
//! `Session` keeps the key and value type in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference, e.g. for `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the user id after a successful signup or login.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i64) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i64>, AppError> {
        let user_id = self.session.get::<i64>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
