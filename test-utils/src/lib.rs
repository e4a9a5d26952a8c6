//! Car Club Test Utils
//!
//! Shared testing utilities for the car club server. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories for seeding users, clubs, events
//! and membership rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn joins_club() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_membership_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let owner = factory::user::create_user(db).await?;
//!     let club = factory::club::create_club(db, owner.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
