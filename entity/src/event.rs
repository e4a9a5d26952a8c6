use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub club_id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub owner_id: i64,
    /// Group chat hosted by the messaging provider, `None` while provisioning is pending.
    pub chat_id: Option<i64>,
    /// Last failed provisioning attempt, `None` if never attempted or provisioned.
    pub chat_attempted_at: Option<DateTimeUtc>,
    pub participants_count: i32,
    pub spectators_count: i32,
    pub event_date: DateTimeUtc,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubId",
        to = "super::club::Column::Id",
        on_delete = "Cascade"
    )]
    Club,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::event_member::Entity")]
    EventMember,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::event_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
