use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000001_create_user_table::User, m20261001_000002_create_club_table::Club};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::ClubId))
                    .col(string(Event::Name))
                    .col(text(Event::Description))
                    .col(string(Event::AvatarUrl))
                    .col(big_integer(Event::OwnerId))
                    .col(big_integer_null(Event::ChatId))
                    .col(integer(Event::ParticipantsCount).default(0))
                    .col(integer(Event::SpectatorsCount).default(0))
                    .col(timestamp_with_time_zone(Event::EventDate))
                    .col(double(Event::Latitude))
                    .col(double(Event::Longitude))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_club_id")
                            .from(Event::Table, Event::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_owner_id")
                            .from(Event::Table, Event::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    ClubId,
    Name,
    Description,
    AvatarUrl,
    OwnerId,
    ChatId,
    ChatAttemptedAt,
    ParticipantsCount,
    SpectatorsCount,
    EventDate,
    Latitude,
    Longitude,
    CreatedAt,
}
