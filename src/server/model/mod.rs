//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod club;
pub mod complaint;
pub mod cursor;
pub mod event;
pub mod group;
pub mod membership;
pub mod user;
