use crate::server::{
    data::event::EventRepository,
    model::{
        cursor::Cursor,
        event::{EventQuery, GeoBounds},
        membership::MembershipStatus,
    },
};
use entity::event_member::EventMemberStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_club;
mod get_by_member;
