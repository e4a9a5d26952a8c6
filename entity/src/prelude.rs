pub use super::club::Entity as Club;
pub use super::club_member::Entity as ClubMember;
pub use super::club_tag::Entity as ClubTag;
pub use super::complaint::Entity as Complaint;
pub use super::event::Entity as Event;
pub use super::event_member::Entity as EventMember;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
