use crate::server::{
    error::AppError,
    model::{cursor::Cursor, membership::MembershipStatus},
    service::user::UserService,
};
use entity::{club_member::ClubMemberStatus, event_member::EventMemberStatus};
use test_utils::{builder::TestBuilder, factory};

mod events_of;
