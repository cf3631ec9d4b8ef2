//! Item handlers: create and list.

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::response::{success_many, success_one};
use crate::schemas::{ItemCreate, ItemRead};
use crate::service::ItemService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /items
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ItemCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let item = ItemService::create(&mut tx, &body).await?;
    tx.commit().await?;
    tracing::info!(id = item.id, "item created");
    Ok(success_one(ItemRead::from(item)))
}

/// GET /items
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let items = ItemService::list(&mut tx).await?;
    tx.commit().await?;
    Ok(success_many(items.into_iter().map(ItemRead::from).collect()))
}
