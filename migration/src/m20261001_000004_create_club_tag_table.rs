use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000002_create_club_table::Club, m20261001_000003_create_tag_table::Tag};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubTag::Table)
                    .if_not_exists()
                    .col(integer(ClubTag::ClubId))
                    .col(integer(ClubTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(ClubTag::ClubId)
                            .col(ClubTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_tag_club_id")
                            .from(ClubTag::Table, ClubTag::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_tag_tag_id")
                            .from(ClubTag::Table, ClubTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubTag {
    Table,
    ClubId,
    TagId,
}
