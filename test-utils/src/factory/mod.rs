//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shortcut
//! using defaults. Factories write rows directly and bypass the service layer, so
//! counters on clubs and events are left at whatever the factory sets.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(db).await?;
//! let club = factory::club::ClubFactory::new(db, owner.id)
//!     .name("Turbo")
//!     .build()
//!     .await?;
//! factory::member::add_club_member(db, club.id, owner.id, ClubMemberStatus::Admin).await?;
//! ```

pub mod club;
pub mod event;
pub mod helpers;
pub mod member;
pub mod user;

pub use club::create_club;
pub use event::create_event;
pub use member::{add_club_member, add_event_member};
pub use user::create_user;
