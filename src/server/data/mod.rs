//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each domain and return domain models or entity
//! models to the service layer. Repositories that take part in multi-table writes are
//! generic over `ConnectionTrait` so the same code runs on a pooled connection or inside
//! a `DatabaseTransaction`.

pub mod club;
pub mod complaint;
pub mod event;
pub mod group;
pub mod membership;
pub mod user;


use sea_orm::{ColumnTrait, DbErr, QueryFilter};

use crate::server::model::cursor::Cursor;

/// Restricts `select` to the id window described by `cursor`.
pub(crate) fn apply_cursor<S, C>(mut select: S, column: C, cursor: &Cursor) -> S
where
    S: QueryFilter,
    C: ColumnTrait,
{
    if let Some(id_gt) = cursor.id_gt {
        select = select.filter(column.gt(id_gt));
    }
    if let Some(id_lte) = cursor.id_lte {
        select = select.filter(column.lte(id_lte));
    }
    select
}

/// Narrows a row count to the `i32` counter columns.
pub(crate) fn counter(count: u64) -> Result<i32, DbErr> {
    i32::try_from(count)
        .map_err(|_| DbErr::Custom(format!("Row count {count} does not fit a counter column")))
}
