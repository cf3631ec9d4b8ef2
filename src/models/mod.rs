//! Persisted records, one per table. Column types mirror `migrations/`.

mod customer;
mod item;
mod order;
mod store;

pub use customer::Customer;
pub use item::Item;
pub use order::Order;
pub use store::{Store, StoreItemRow};
