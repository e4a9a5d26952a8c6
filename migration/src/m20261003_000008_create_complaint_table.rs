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
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(pk_auto(Complaint::Id))
                    .col(big_integer(Complaint::UserId))
                    .col(string_len(Complaint::Target, 16))
                    .col(integer(Complaint::TargetId))
                    .col(text(Complaint::Text))
                    .col(
                        timestamp_with_time_zone(Complaint::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_user_id")
                            .from(Complaint::Table, Complaint::UserId)
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
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Complaint {
    Table,
    Id,
    UserId,
    Target,
    TargetId,
    Text,
    CreatedAt,
}
