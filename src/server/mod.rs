//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! Serenity for the Discord-backed notification bridge.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Membership rules, transaction boundaries and bridge calls
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, bridge, app url)
//! - **Startup** (`startup`) - Initialization of database, sessions, CORS and the bridge
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron job retrying pending chat provisioning
//! - **Bot** (`bot/`) - Notification bridge trait and its Discord implementation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session user
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** applies the membership rules inside a transaction, then notifies
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
