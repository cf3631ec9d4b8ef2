//! Request extractors that reject with [`AppError`](crate::error::AppError).

pub mod id;
pub mod json;

pub use id::EntityId;
pub use json::ValidatedJson;
