use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000002_create_club_table::Club, m20261002_000006_create_event_table::Event};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Club::Table)
                    .add_column(timestamp_with_time_zone_null(Club::ChatAttemptedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Event::Table)
                    .add_column(timestamp_with_time_zone_null(Event::ChatAttemptedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Event::Table)
                    .drop_column(Event::ChatAttemptedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Club::Table)
                    .drop_column(Club::ChatAttemptedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
