//! Cron jobs.

pub mod chat_backfill;
