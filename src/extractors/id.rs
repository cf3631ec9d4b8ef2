//! Integer id from the last path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Surrogate key taken from a `/:id` route parameter. Non-integer ids are validation
/// errors rather than axum's plain-text rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        raw.parse::<i64>()
            .map(EntityId)
            .map_err(|_| AppError::Validation(format!("invalid id: {}", raw)))
    }
}
