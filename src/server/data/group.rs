//! Kind-generic operations on the club and event tables.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, NullOrdering},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{counter, membership::MembershipRepository},
    model::{
        group::{EntityKind, Group},
        membership::MembershipStatus,
    },
};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a club or event by id.
    pub async fn find(&self, kind: EntityKind, id: i32) -> Result<Option<Group>, DbErr> {
        let group = match kind {
            EntityKind::Club => entity::prelude::Club::find_by_id(id)
                .one(self.db)
                .await?
                .map(Group::from_club),
            EntityKind::Event => entity::prelude::Event::find_by_id(id)
                .one(self.db)
                .await?
                .map(Group::from_event),
        };

        Ok(group)
    }

    /// Stores the provisioned chat id unless another provisioning stored one first.
    ///
    /// # Returns
    /// - `Ok(true)` - The chat id was stored
    /// - `Ok(false)` - The entity is gone or already has a chat
    pub async fn set_chat_id(&self, kind: EntityKind, id: i32, chat_id: i64) -> Result<bool, DbErr> {
        let result = match kind {
            EntityKind::Club => {
                entity::prelude::Club::update_many()
                    .col_expr(entity::club::Column::ChatId, Expr::value(chat_id))
                    .filter(entity::club::Column::Id.eq(id))
                    .filter(entity::club::Column::ChatId.is_null())
                    .exec(self.db)
                    .await?
            }
            EntityKind::Event => {
                entity::prelude::Event::update_many()
                    .col_expr(entity::event::Column::ChatId, Expr::value(chat_id))
                    .filter(entity::event::Column::Id.eq(id))
                    .filter(entity::event::Column::ChatId.is_null())
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Records a failed provisioning attempt, moving the entity to the back of the
    /// backfill queue.
    pub async fn mark_chat_attempt(
        &self,
        kind: EntityKind,
        id: i32,
        attempted_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        match kind {
            EntityKind::Club => {
                entity::prelude::Club::update_many()
                    .col_expr(entity::club::Column::ChatAttemptedAt, Expr::value(attempted_at))
                    .filter(entity::club::Column::Id.eq(id))
                    .exec(self.db)
                    .await?;
            }
            EntityKind::Event => {
                entity::prelude::Event::update_many()
                    .col_expr(entity::event::Column::ChatAttemptedAt, Expr::value(attempted_at))
                    .filter(entity::event::Column::Id.eq(id))
                    .exec(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    /// Replaces the avatar url.
    ///
    /// # Returns
    /// - `Ok(true)` - The entity exists and was updated
    /// - `Ok(false)` - No entity with that id
    pub async fn set_avatar(
        &self,
        kind: EntityKind,
        id: i32,
        avatar_url: &str,
    ) -> Result<bool, DbErr> {
        let result = match kind {
            EntityKind::Club => {
                entity::prelude::Club::update_many()
                    .col_expr(entity::club::Column::AvatarUrl, Expr::value(avatar_url))
                    .filter(entity::club::Column::Id.eq(id))
                    .exec(self.db)
                    .await?
            }
            EntityKind::Event => {
                entity::prelude::Event::update_many()
                    .col_expr(entity::event::Column::AvatarUrl, Expr::value(avatar_url))
                    .filter(entity::event::Column::Id.eq(id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Recomputes the denormalized member counters from the membership table.
    ///
    /// Must run on the same connection or transaction as the membership write, so the
    /// counters always match the rows they summarize.
    pub async fn refresh_member_counts(&self, kind: EntityKind, id: i32) -> Result<(), DbErr> {
        let members = MembershipRepository::new(self.db);
        let participants = counter(
            members
                .count(
                    kind,
                    id,
                    &[MembershipStatus::Admin, MembershipStatus::Participant],
                )
                .await?,
        )?;
        let followers = counter(
            members
                .count(kind, id, &[MembershipStatus::Follower])
                .await?,
        )?;

        match kind {
            EntityKind::Club => {
                entity::prelude::Club::update_many()
                    .col_expr(
                        entity::club::Column::ParticipantsCount,
                        Expr::value(participants),
                    )
                    .col_expr(entity::club::Column::SubscribersCount, Expr::value(followers))
                    .filter(entity::club::Column::Id.eq(id))
                    .exec(self.db)
                    .await?;
            }
            EntityKind::Event => {
                entity::prelude::Event::update_many()
                    .col_expr(
                        entity::event::Column::ParticipantsCount,
                        Expr::value(participants),
                    )
                    .col_expr(entity::event::Column::SpectatorsCount, Expr::value(followers))
                    .filter(entity::event::Column::Id.eq(id))
                    .exec(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    /// Deletes the entity together with its membership rows.
    ///
    /// Deleting a club also deletes its events, their memberships and its tag links.
    ///
    /// # Returns
    /// - `Ok(true)` - The entity existed and was deleted
    /// - `Ok(false)` - No entity with that id
    pub async fn delete(&self, kind: EntityKind, id: i32) -> Result<bool, DbErr> {
        let members = MembershipRepository::new(self.db);

        let result = match kind {
            EntityKind::Club => {
                let event_ids: Vec<i32> = entity::prelude::Event::find()
                    .select_only()
                    .column(entity::event::Column::Id)
                    .filter(entity::event::Column::ClubId.eq(id))
                    .into_tuple()
                    .all(self.db)
                    .await?;

                for event_id in event_ids {
                    members.delete_all(EntityKind::Event, event_id).await?;
                }

                entity::prelude::Event::delete_many()
                    .filter(entity::event::Column::ClubId.eq(id))
                    .exec(self.db)
                    .await?;
                entity::prelude::ClubTag::delete_many()
                    .filter(entity::club_tag::Column::ClubId.eq(id))
                    .exec(self.db)
                    .await?;
                members.delete_all(EntityKind::Club, id).await?;

                entity::prelude::Club::delete_by_id(id)
                    .exec(self.db)
                    .await?
            }
            EntityKind::Event => {
                members.delete_all(EntityKind::Event, id).await?;

                entity::prelude::Event::delete_by_id(id)
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Lists entities whose chat has not been provisioned yet.
    ///
    /// Never attempted entities come first, then the least recently attempted, so
    /// entities that keep failing cannot hold the batch.
    pub async fn chat_pending(&self, kind: EntityKind, limit: u64) -> Result<Vec<Group>, DbErr> {
        let groups = match kind {
            EntityKind::Club => entity::prelude::Club::find()
                .filter(entity::club::Column::ChatId.is_null())
                .order_by_with_nulls(
                    entity::club::Column::ChatAttemptedAt,
                    Order::Asc,
                    NullOrdering::First,
                )
                .order_by_asc(entity::club::Column::Id)
                .limit(limit)
                .all(self.db)
                .await?
                .into_iter()
                .map(Group::from_club)
                .collect(),
            EntityKind::Event => entity::prelude::Event::find()
                .filter(entity::event::Column::ChatId.is_null())
                .order_by_with_nulls(
                    entity::event::Column::ChatAttemptedAt,
                    Order::Asc,
                    NullOrdering::First,
                )
                .order_by_asc(entity::event::Column::Id)
                .limit(limit)
                .all(self.db)
                .await?
                .into_iter()
                .map(Group::from_event)
                .collect(),
        };

        Ok(groups)
    }
}
