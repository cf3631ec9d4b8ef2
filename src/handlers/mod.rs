//! HTTP handlers. Each one runs inside a single transaction: begin, call the data layer,
//! commit. Any early return drops the transaction, which rolls it back.

pub mod customers;
pub mod items;
pub mod orders;
pub mod stores;
