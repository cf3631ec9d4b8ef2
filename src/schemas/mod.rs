//! Request and response payloads. Inputs are checked with [`Validate`] before a handler
//! touches the database; outputs are the exact shapes returned to callers.

mod customer;
mod item;
mod order;
mod rules;
mod store;

pub use customer::{CustomerCreate, CustomerRead, CustomerUpdate};
pub use item::{ItemBrief, ItemCreate, ItemRead};
pub use order::{OrderCreate, OrderRead};
pub use store::{StoreCreate, StoreItemsUpdate, StoreRead};

use crate::error::AppError;

/// Field-level checks that JSON deserialization alone cannot express.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}
