pub mod api;
pub mod club;
pub mod event;
pub mod group;
pub mod user;
