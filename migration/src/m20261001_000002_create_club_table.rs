use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string(Club::Name))
                    .col(text(Club::Description))
                    .col(string(Club::AvatarUrl))
                    .col(big_integer(Club::OwnerId))
                    .col(big_integer_null(Club::ChatId))
                    .col(integer(Club::ParticipantsCount).default(0))
                    .col(integer(Club::SubscribersCount).default(0))
                    .col(integer(Club::EventsCount).default(0))
                    .col(
                        timestamp_with_time_zone(Club::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_owner_id")
                            .from(Club::Table, Club::OwnerId)
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
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    Description,
    AvatarUrl,
    OwnerId,
    ChatId,
    ChatAttemptedAt,
    ParticipantsCount,
    SubscribersCount,
    EventsCount,
    CreatedAt,
}
