use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    /// External platform id of the user, doubles as the Discord user id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub avatar_url: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::club_member::Entity")]
    ClubMember,
    #[sea_orm(has_many = "super::event_member::Entity")]
    EventMember,
}

impl Related<super::club_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubMember.def()
    }
}

impl Related<super::event_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
