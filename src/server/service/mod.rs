//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! membership rules, own transaction boundaries and call the notification bridge once
//! the database work has committed.

pub mod authorization;
pub mod chat;
pub mod club;
pub mod complaint;
pub mod event;
pub mod group;
pub mod membership;
pub mod user;
