//! Membership rows for clubs and events.
//!
//! Every method dispatches on [`EntityKind`] to the `club_member` or `event_member`
//! table. Rows are keyed by `(user_id, entity_id)`, so a user holds at most one status
//! per entity.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::apply_cursor,
    model::{
        cursor::Cursor, group::EntityKind, membership::MembershipStatus, user::UserSummary,
    },
};

pub struct MembershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the status of `user_id` on the entity.
    ///
    /// # Returns
    /// - `Ok(Some(status))` - The user has a membership row
    /// - `Ok(None)` - No row for this pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_status(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<Option<MembershipStatus>, DbErr> {
        let status = match kind {
            EntityKind::Club => entity::prelude::ClubMember::find_by_id((user_id, entity_id))
                .one(self.db)
                .await?
                .map(|row| MembershipStatus::from_club(row.status)),
            EntityKind::Event => entity::prelude::EventMember::find_by_id((user_id, entity_id))
                .one(self.db)
                .await?
                .map(|row| MembershipStatus::from_event(row.status)),
        };

        Ok(status)
    }

    /// Sets the status of `user_id` on the entity.
    ///
    /// Uses a single `INSERT ... ON CONFLICT (user_id, entity_id) DO UPDATE`, so
    /// concurrent writers for the same pair never produce a second row.
    pub async fn upsert(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
        status: MembershipStatus,
    ) -> Result<(), DbErr> {
        match kind {
            EntityKind::Club => {
                entity::prelude::ClubMember::insert(entity::club_member::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    club_id: ActiveValue::Set(entity_id),
                    status: ActiveValue::Set(status.into_club()),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::club_member::Column::UserId,
                        entity::club_member::Column::ClubId,
                    ])
                    .update_column(entity::club_member::Column::Status)
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
            }
            EntityKind::Event => {
                entity::prelude::EventMember::insert(entity::event_member::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    event_id: ActiveValue::Set(entity_id),
                    status: ActiveValue::Set(status.into_event()),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::event_member::Column::UserId,
                        entity::event_member::Column::EventId,
                    ])
                    .update_column(entity::event_member::Column::Status)
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Deletes the membership row of `user_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row existed for this pair
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(
        &self,
        kind: EntityKind,
        entity_id: i32,
        user_id: i64,
    ) -> Result<bool, DbErr> {
        let result = match kind {
            EntityKind::Club => {
                entity::prelude::ClubMember::delete_by_id((user_id, entity_id))
                    .exec(self.db)
                    .await?
            }
            EntityKind::Event => {
                entity::prelude::EventMember::delete_by_id((user_id, entity_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Deletes every membership row of the entity.
    pub async fn delete_all(&self, kind: EntityKind, entity_id: i32) -> Result<u64, DbErr> {
        let result = match kind {
            EntityKind::Club => {
                entity::prelude::ClubMember::delete_many()
                    .filter(entity::club_member::Column::ClubId.eq(entity_id))
                    .exec(self.db)
                    .await?
            }
            EntityKind::Event => {
                entity::prelude::EventMember::delete_many()
                    .filter(entity::event_member::Column::EventId.eq(entity_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    /// Counts rows of the entity holding any of `statuses`.
    pub async fn count(
        &self,
        kind: EntityKind,
        entity_id: i32,
        statuses: &[MembershipStatus],
    ) -> Result<u64, DbErr> {
        match kind {
            EntityKind::Club => {
                entity::prelude::ClubMember::find()
                    .filter(entity::club_member::Column::ClubId.eq(entity_id))
                    .filter(
                        entity::club_member::Column::Status
                            .is_in(statuses.iter().map(|status| status.into_club())),
                    )
                    .count(self.db)
                    .await
            }
            EntityKind::Event => {
                entity::prelude::EventMember::find()
                    .filter(entity::event_member::Column::EventId.eq(entity_id))
                    .filter(
                        entity::event_member::Column::Status
                            .is_in(statuses.iter().map(|status| status.into_event())),
                    )
                    .count(self.db)
                    .await
            }
        }
    }

    /// Lists users holding `status` on the entity.
    ///
    /// The cursor applies to user ids. Results are ordered by surname descending, with
    /// user id descending as tie-breaker.
    pub async fn list_users(
        &self,
        kind: EntityKind,
        entity_id: i32,
        status: MembershipStatus,
        cursor: &Cursor,
    ) -> Result<Vec<UserSummary>, DbErr> {
        let select = match kind {
            EntityKind::Club => entity::prelude::User::find()
                .join(
                    sea_orm::JoinType::InnerJoin,
                    entity::user::Relation::ClubMember.def(),
                )
                .filter(entity::club_member::Column::ClubId.eq(entity_id))
                .filter(entity::club_member::Column::Status.eq(status.into_club())),
            EntityKind::Event => entity::prelude::User::find()
                .join(
                    sea_orm::JoinType::InnerJoin,
                    entity::user::Relation::EventMember.def(),
                )
                .filter(entity::event_member::Column::EventId.eq(entity_id))
                .filter(entity::event_member::Column::Status.eq(status.into_event())),
        };

        let users = apply_cursor(select, entity::user::Column::Id, cursor)
            .order_by_desc(entity::user::Column::Surname)
            .order_by_desc(entity::user::Column::Id)
            .limit(cursor.limit)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(UserSummary::from_entity).collect())
    }
}
