use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub avatar_url: String,
    pub owner_id: i64,
    /// Group chat hosted by the messaging provider, `None` while provisioning is pending.
    pub chat_id: Option<i64>,
    /// Last failed provisioning attempt, `None` if never attempted or provisioned.
    pub chat_attempted_at: Option<DateTimeUtc>,
    pub participants_count: i32,
    pub subscribers_count: i32,
    pub events_count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::club_member::Entity")]
    ClubMember,
    #[sea_orm(has_many = "super::club_tag::Entity")]
    ClubTag,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
}

impl Related<super::club_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubMember.def()
    }
}

impl Related<super::club_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubTag.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
