pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_club_table;
mod m20261001_000003_create_tag_table;
mod m20261001_000004_create_club_tag_table;
mod m20261001_000005_create_club_member_table;
mod m20261002_000006_create_event_table;
mod m20261002_000007_create_event_member_table;
mod m20261003_000008_create_complaint_table;
mod m20261004_000009_add_chat_attempted_at;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_club_table::Migration),
            Box::new(m20261001_000003_create_tag_table::Migration),
            Box::new(m20261001_000004_create_club_tag_table::Migration),
            Box::new(m20261001_000005_create_club_member_table::Migration),
            Box::new(m20261002_000006_create_event_table::Migration),
            Box::new(m20261002_000007_create_event_member_table::Migration),
            Box::new(m20261003_000008_create_complaint_table::Migration),
            Box::new(m20261004_000009_add_chat_attempted_at::Migration),
        ]
    }
}
