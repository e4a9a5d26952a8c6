//! Event creation, lookup and listings.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    bot::NotificationBridge,
    data::{club::ClubRepository, event::EventRepository, membership::MembershipRepository},
    error::AppError,
    model::{
        event::{CreateEventParams, Event, EventDetail, EventQuery},
        group::{EntityKind, Group},
    },
    service::{
        authorization::AuthorizationGate, chat::ChatService, group::validate_name,
        membership::MembershipService,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    bridge: &'a dyn NotificationBridge,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, bridge: &'a dyn NotificationBridge) -> Self {
        Self { db, bridge }
    }

    /// Creates an event for a club. Only the club admin may do this.
    ///
    /// The event, the creator's admin membership and the club's event counter are
    /// written in one transaction, then the event chat is provisioned.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::NotFound)` - Parent club does not exist
    /// - `Err(AuthError::AccessDenied)` - Creator is not the club admin
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        validate_name(EntityKind::Event, &params.name)?;
        if !(-90.0..=90.0).contains(&params.latitude)
            || !(-180.0..=180.0).contains(&params.longitude)
        {
            return Err(AppError::BadRequest(
                "Event coordinates are out of range".to_string(),
            ));
        }

        AuthorizationGate::new(self.db)
            .require_admin(EntityKind::Club, params.club_id, params.owner_id)
            .await?;

        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn).create(&params).await?;
        MembershipService::grant_creator_admin(
            &txn,
            EntityKind::Event,
            event.id,
            params.owner_id,
        )
        .await?;
        ClubRepository::new(&txn)
            .refresh_events_count(params.club_id)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "User {} created event {} in club {}",
            params.owner_id,
            event.id,
            params.club_id
        );

        let event_id = event.id;
        let group = Group {
            kind: EntityKind::Event,
            id: event.id,
            name: event.name,
            owner_id: event.owner_id,
            chat_id: event.chat_id,
            parent_club_id: Some(event.club_id),
        };
        ChatService::new(self.db, self.bridge)
            .provision(&group)
            .await?;

        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Event {event_id} vanished after creation"))
            })
    }

    /// Gets an event with the viewer's membership status.
    pub async fn get(&self, event_id: i32, viewer: Option<i64>) -> Result<EventDetail, AppError> {
        let Some(event) = EventRepository::new(self.db).get_by_id(event_id).await? else {
            return Err(AppError::entity_not_found(EntityKind::Event, event_id));
        };

        let viewer_status = match viewer {
            Some(user_id) => {
                MembershipRepository::new(self.db)
                    .get_status(EntityKind::Event, event_id, user_id)
                    .await?
            }
            None => None,
        };

        Ok(EventDetail {
            event,
            viewer_status,
        })
    }

    pub async fn list(&self, query: &EventQuery) -> Result<Vec<Event>, AppError> {
        let events = EventRepository::new(self.db).get_paginated(query).await?;
        Ok(events)
    }
}
