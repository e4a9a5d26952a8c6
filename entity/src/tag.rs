use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Number of clubs carrying this tag.
    pub usage_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::club_tag::Entity")]
    ClubTag,
}

impl Related<super::club_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
