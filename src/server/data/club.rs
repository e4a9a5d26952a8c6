//! Club and tag persistence.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{apply_cursor, counter},
    model::{
        club::{Club, ClubQuery, CreateClubParams, Tag},
        cursor::Cursor,
        membership::MembershipStatus,
    },
};

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a club with zeroed counters and a pending chat.
    ///
    /// Tags are attached separately with [`Self::attach_tags`].
    pub async fn create(&self, params: &CreateClubParams) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            description: ActiveValue::Set(params.description.clone()),
            avatar_url: ActiveValue::Set(params.avatar_url.clone()),
            owner_id: ActiveValue::Set(params.owner_id),
            chat_id: ActiveValue::Set(None),
            participants_count: ActiveValue::Set(0),
            subscribers_count: ActiveValue::Set(0),
            events_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Links `tags` to the club, creating unknown tags, and refreshes their usage counts.
    pub async fn attach_tags(&self, club_id: i32, tags: &[String]) -> Result<(), DbErr> {
        let mut tag_ids = Vec::with_capacity(tags.len());

        for name in tags {
            let existing = entity::prelude::Tag::find()
                .filter(entity::tag::Column::Name.eq(name.as_str()))
                .one(self.db)
                .await?;

            let tag = match existing {
                Some(tag) => tag,
                None => {
                    entity::tag::ActiveModel {
                        name: ActiveValue::Set(name.clone()),
                        usage_count: ActiveValue::Set(0),
                        ..Default::default()
                    }
                    .insert(self.db)
                    .await?
                }
            };

            entity::club_tag::ActiveModel {
                club_id: ActiveValue::Set(club_id),
                tag_id: ActiveValue::Set(tag.id),
            }
            .insert(self.db)
            .await?;

            tag_ids.push(tag.id);
        }

        self.refresh_tag_usage(&tag_ids).await
    }

    /// Recomputes `usage_count` of each tag from its club links.
    pub async fn refresh_tag_usage(&self, tag_ids: &[i32]) -> Result<(), DbErr> {
        for &tag_id in tag_ids {
            let usage = counter(
                entity::prelude::ClubTag::find()
                    .filter(entity::club_tag::Column::TagId.eq(tag_id))
                    .count(self.db)
                    .await?,
            )?;

            entity::prelude::Tag::update_many()
                .col_expr(entity::tag::Column::UsageCount, Expr::value(usage))
                .filter(entity::tag::Column::Id.eq(tag_id))
                .exec(self.db)
                .await?;
        }

        Ok(())
    }

    /// Ids of the tags linked to the club.
    pub async fn tag_ids(&self, club_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ClubTag::find()
            .select_only()
            .column(entity::club_tag::Column::TagId)
            .filter(entity::club_tag::Column::ClubId.eq(club_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Tag names per club, sorted by name.
    pub async fn tags_of(&self, club_ids: &[i32]) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
        if club_ids.is_empty() {
            return Ok(tags);
        }

        let rows = entity::prelude::ClubTag::find()
            .filter(entity::club_tag::Column::ClubId.is_in(club_ids.iter().copied()))
            .find_also_related(entity::prelude::Tag)
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        for (link, tag) in rows {
            if let Some(tag) = tag {
                tags.entry(link.club_id).or_default().push(tag.name);
            }
        }

        Ok(tags)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Club>, DbErr> {
        let Some(club) = entity::prelude::Club::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut tags = self.tags_of(&[id]).await?;
        let tags = tags.remove(&id).unwrap_or_default();

        Ok(Some(Club::from_entity(club, tags)))
    }

    /// Lists clubs newest first.
    ///
    /// With a query, a club matches when its name or any of its tag names contains it.
    pub async fn get_paginated(&self, query: &ClubQuery) -> Result<Vec<Club>, DbErr> {
        let mut select = entity::prelude::Club::find();

        if let Some(needle) = query.query.as_deref().filter(|q| !q.is_empty()) {
            let tagged: Vec<i32> = entity::prelude::ClubTag::find()
                .select_only()
                .column(entity::club_tag::Column::ClubId)
                .inner_join(entity::prelude::Tag)
                .filter(entity::tag::Column::Name.contains(needle))
                .into_tuple()
                .all(self.db)
                .await?;

            select = select.filter(
                Condition::any()
                    .add(entity::club::Column::Name.contains(needle))
                    .add(entity::club::Column::Id.is_in(tagged)),
            );
        }

        let clubs = apply_cursor(select, entity::club::Column::Id, &query.cursor)
            .order_by_desc(entity::club::Column::Id)
            .limit(query.cursor.limit)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = clubs.iter().map(|club| club.id).collect();
        let mut tags = self.tags_of(&ids).await?;

        Ok(clubs
            .into_iter()
            .map(|club| {
                let club_tags = tags.remove(&club.id).unwrap_or_default();
                Club::from_entity(club, club_tags)
            })
            .collect())
    }

    /// Lists clubs where `user_id` holds `status`.
    ///
    /// The cursor applies to club ids. Results are ordered by name descending, with
    /// club id descending as tie-breaker.
    pub async fn get_by_member(
        &self,
        user_id: i64,
        status: MembershipStatus,
        cursor: &Cursor,
    ) -> Result<Vec<Club>, DbErr> {
        let select = entity::prelude::Club::find()
            .inner_join(entity::prelude::ClubMember)
            .filter(entity::club_member::Column::UserId.eq(user_id))
            .filter(entity::club_member::Column::Status.eq(status.into_club()));

        let clubs = apply_cursor(select, entity::club::Column::Id, cursor)
            .order_by_desc(entity::club::Column::Name)
            .order_by_desc(entity::club::Column::Id)
            .limit(cursor.limit)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = clubs.iter().map(|club| club.id).collect();
        let mut tags = self.tags_of(&ids).await?;

        Ok(clubs
            .into_iter()
            .map(|club| {
                let club_tags = tags.remove(&club.id).unwrap_or_default();
                Club::from_entity(club, club_tags)
            })
            .collect())
    }

    /// All tags, most used first.
    pub async fn get_tags(&self) -> Result<Vec<Tag>, DbErr> {
        let tags = entity::prelude::Tag::find()
            .order_by_desc(entity::tag::Column::UsageCount)
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    /// Recomputes `events_count` of the club from its events.
    pub async fn refresh_events_count(&self, club_id: i32) -> Result<(), DbErr> {
        let events = counter(
            entity::prelude::Event::find()
                .filter(entity::event::Column::ClubId.eq(club_id))
                .count(self.db)
                .await?,
        )?;

        entity::prelude::Club::update_many()
            .col_expr(entity::club::Column::EventsCount, Expr::value(events))
            .filter(entity::club::Column::Id.eq(club_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
