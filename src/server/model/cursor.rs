//! Cursor pagination shared by entity and member listings.

/// Default page size when the client does not send `limit`.
pub const DEFAULT_LIMIT: u64 = 20;
/// Upper bound on the page size.
pub const MAX_LIMIT: u64 = 100;

/// Id-based cursor: rows with `id > id_gt` and `id <= id_lte`, at most `limit` of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub id_gt: Option<i64>,
    pub id_lte: Option<i64>,
    pub limit: u64,
}

impl Cursor {
    /// Builds a cursor, clamping `limit` into `1..=MAX_LIMIT`.
    pub fn new(id_gt: Option<i64>, id_lte: Option<i64>, limit: Option<u64>) -> Self {
        Self {
            id_gt,
            id_lte,
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
