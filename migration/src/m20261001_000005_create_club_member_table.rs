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
                    .table(ClubMember::Table)
                    .if_not_exists()
                    .col(big_integer(ClubMember::UserId))
                    .col(integer(ClubMember::ClubId))
                    .col(string_len(ClubMember::Status, 32))
                    .primary_key(
                        Index::create()
                            .col(ClubMember::UserId)
                            .col(ClubMember::ClubId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_member_user_id")
                            .from(ClubMember::Table, ClubMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_member_club_id")
                            .from(ClubMember::Table, ClubMember::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_club_member_club_status")
                    .table(ClubMember::Table)
                    .col(ClubMember::ClubId)
                    .col(ClubMember::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubMember {
    Table,
    UserId,
    ClubId,
    Status,
}
