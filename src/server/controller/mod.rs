//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert DTOs into domain parameters, call one
//! service and convert the result back into a DTO.

pub mod auth;
pub mod club;
pub mod event;
pub mod group;
pub mod user;

use serde::Deserialize;

use crate::server::model::cursor::Cursor;

/// Cursor query parameters shared by listings.
#[derive(Deserialize, Default)]
pub struct CursorParams {
    pub id_gt: Option<i64>,
    pub id_lte: Option<i64>,
    pub limit: Option<u64>,
}

impl CursorParams {
    pub fn into_cursor(self) -> Cursor {
        Cursor::new(self.id_gt, self.id_lte, self.limit)
    }
}
