//! SeaORM entity models for the car club database schema.

pub mod prelude;

pub mod club;
pub mod club_member;
pub mod club_tag;
pub mod complaint;
pub mod event;
pub mod event_member;
pub mod tag;
pub mod user;
