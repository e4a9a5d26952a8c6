//! Event persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::apply_cursor,
    model::{
        cursor::Cursor,
        event::{CreateEventParams, Event, EventQuery},
        membership::MembershipStatus,
    },
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an event with zeroed counters and a pending chat.
    pub async fn create(&self, params: &CreateEventParams) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            club_id: ActiveValue::Set(params.club_id),
            name: ActiveValue::Set(params.name.clone()),
            description: ActiveValue::Set(params.description.clone()),
            avatar_url: ActiveValue::Set(params.avatar_url.clone()),
            owner_id: ActiveValue::Set(params.owner_id),
            chat_id: ActiveValue::Set(None),
            participants_count: ActiveValue::Set(0),
            spectators_count: ActiveValue::Set(0),
            event_date: ActiveValue::Set(params.event_date),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(event))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let event = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(event.map(Event::from_entity))
    }

    /// Lists events newest first, filtered by name substring and bounding box.
    pub async fn get_paginated(&self, query: &EventQuery) -> Result<Vec<Event>, DbErr> {
        let mut select = entity::prelude::Event::find();

        if let Some(needle) = query.query.as_deref().filter(|q| !q.is_empty()) {
            select = select.filter(entity::event::Column::Name.contains(needle));
        }

        if let Some(bounds) = query.bounds {
            select = select
                .filter(entity::event::Column::Latitude.between(bounds.min_lat, bounds.max_lat))
                .filter(entity::event::Column::Longitude.between(bounds.min_lng, bounds.max_lng));
        }

        let events = apply_cursor(select, entity::event::Column::Id, &query.cursor)
            .order_by_desc(entity::event::Column::Id)
            .limit(query.cursor.limit)
            .all(self.db)
            .await?;

        Ok(events.into_iter().map(Event::from_entity).collect())
    }

    /// Lists the events of a club newest first.
    pub async fn get_by_club(&self, club_id: i32, cursor: &Cursor) -> Result<Vec<Event>, DbErr> {
        let select =
            entity::prelude::Event::find().filter(entity::event::Column::ClubId.eq(club_id));

        let events = apply_cursor(select, entity::event::Column::Id, cursor)
            .order_by_desc(entity::event::Column::Id)
            .limit(cursor.limit)
            .all(self.db)
            .await?;

        Ok(events.into_iter().map(Event::from_entity).collect())
    }
    /// Lists events where `user_id` holds `status`, latest event date first.
    ///
    /// The cursor applies to event ids.
    pub async fn get_by_member(
        &self,
        user_id: i64,
        status: MembershipStatus,
        cursor: &Cursor,
    ) -> Result<Vec<Event>, DbErr> {
        let select = entity::prelude::Event::find()
            .inner_join(entity::prelude::EventMember)
            .filter(entity::event_member::Column::UserId.eq(user_id))
            .filter(entity::event_member::Column::Status.eq(status.into_event()));

        let events = apply_cursor(select, entity::event::Column::Id, cursor)
            .order_by_desc(entity::event::Column::EventDate)
            .order_by_desc(entity::event::Column::Id)
            .limit(cursor.limit)
            .all(self.db)
            .await?;

        Ok(events.into_iter().map(Event::from_entity).collect())
    }
}
