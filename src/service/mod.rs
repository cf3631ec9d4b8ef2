//! Data-layer operations. Every function takes a connection so the caller owns the
//! transaction scope.

mod customers;
mod items;
mod orders;
mod stores;

pub use customers::CustomerService;
pub use items::{missing_ids, ItemService};
pub use orders::OrderService;
pub use stores::StoreService;

/// Postgres error classes the handlers translate into client errors.
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
