use crate::server::{
    data::membership::MembershipRepository,
    model::{cursor::Cursor, group::EntityKind, membership::MembershipStatus},
};
use entity::{club_member::ClubMemberStatus, event_member::EventMemberStatus};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod upsert;
