//! Club creation, lookup and listings.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    bot::NotificationBridge,
    data::{club::ClubRepository, event::EventRepository, membership::MembershipRepository},
    error::AppError,
    model::{
        club::{Club, ClubDetail, ClubQuery, CreateClubParams, Tag},
        cursor::Cursor,
        event::Event,
        group::{EntityKind, Group},
    },
    service::{chat::ChatService, group::validate_name, membership::MembershipService},
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
    bridge: &'a dyn NotificationBridge,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection, bridge: &'a dyn NotificationBridge) -> Self {
        Self { db, bridge }
    }

    /// Creates a club owned and administered by `params.owner_id`.
    ///
    /// The club, its tags and the admin membership are written in one transaction. The
    /// group chat is provisioned afterwards; if that fails the club is returned chat
    /// pending.
    ///
    /// # Returns
    /// - `Ok(Club)` - The created club
    /// - `Err(AppError::BadRequest)` - Empty or overlong club name
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, AppError> {
        validate_name(EntityKind::Club, &params.name)?;

        let txn = self.db.begin().await?;
        let clubs = ClubRepository::new(&txn);

        let club = clubs.create(&params).await?;
        clubs.attach_tags(club.id, &params.tags).await?;
        MembershipService::grant_creator_admin(&txn, EntityKind::Club, club.id, params.owner_id)
            .await?;
        txn.commit().await?;

        tracing::info!("User {} created club {}", params.owner_id, club.id);

        let club_id = club.id;
        ChatService::new(self.db, self.bridge)
            .provision(&Group::from_club(club))
            .await?;

        ClubRepository::new(self.db)
            .get_by_id(club_id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Club {club_id} vanished after creation")))
    }

    /// Gets a club with the viewer's membership status.
    pub async fn get(&self, club_id: i32, viewer: Option<i64>) -> Result<ClubDetail, AppError> {
        let Some(club) = ClubRepository::new(self.db).get_by_id(club_id).await? else {
            return Err(AppError::entity_not_found(EntityKind::Club, club_id));
        };

        let viewer_status = match viewer {
            Some(user_id) => {
                MembershipRepository::new(self.db)
                    .get_status(EntityKind::Club, club_id, user_id)
                    .await?
            }
            None => None,
        };

        Ok(ClubDetail {
            club,
            viewer_status,
        })
    }

    pub async fn list(&self, query: &ClubQuery) -> Result<Vec<Club>, AppError> {
        let clubs = ClubRepository::new(self.db).get_paginated(query).await?;
        Ok(clubs)
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, AppError> {
        let tags = ClubRepository::new(self.db).get_tags().await?;
        Ok(tags)
    }

    /// Lists the events organized by a club.
    pub async fn events(&self, club_id: i32, cursor: &Cursor) -> Result<Vec<Event>, AppError> {
        if ClubRepository::new(self.db).get_by_id(club_id).await?.is_none() {
            return Err(AppError::entity_not_found(EntityKind::Club, club_id));
        }

        let events = EventRepository::new(self.db)
            .get_by_club(club_id, cursor)
            .await?;

        Ok(events)
    }
}
