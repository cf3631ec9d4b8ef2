//! Store handlers, including replacement of the store's item set.

use crate::error::AppError;
use crate::extractors::{EntityId, ValidatedJson};
use crate::models::{Store, StoreItemRow};
use crate::response::{success_many, success_one, success_one_ok};
use crate::schemas::{ItemBrief, StoreCreate, StoreItemsUpdate, StoreRead};
use crate::service::{ItemService, StoreService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgConnection;
use std::collections::HashMap;

/// Pair each store with its item rows; stores keep their order, stores without items get
/// an empty list.
fn assemble(stores: Vec<Store>, rows: Vec<StoreItemRow>) -> Vec<StoreRead> {
    let mut by_store: HashMap<i64, Vec<ItemBrief>> = HashMap::new();
    for row in rows {
        by_store.entry(row.store_id).or_default().push(ItemBrief::from(row));
    }
    stores
        .into_iter()
        .map(|s| {
            let items = by_store.remove(&s.id).unwrap_or_default();
            StoreRead::new(s, items)
        })
        .collect()
}

async fn load_one(conn: &mut PgConnection, store: Store) -> Result<StoreRead, AppError> {
    let rows = StoreService::items_for(conn, &[store.id]).await?;
    let items = rows.into_iter().map(ItemBrief::from).collect();
    Ok(StoreRead::new(store, items))
}

async fn ensure_items_exist(conn: &mut PgConnection, item_ids: &[i64]) -> Result<(), AppError> {
    let missing = ItemService::find_missing(conn, item_ids).await?;
    if !missing.is_empty() {
        return Err(AppError::UnknownItems(missing));
    }
    Ok(())
}

/// POST /stores. Unknown item ids reject the request before the store row is written.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<StoreCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    ensure_items_exist(&mut tx, &body.item_ids).await?;
    let store = StoreService::create(&mut tx, &body.name, &body.location).await?;
    StoreService::attach_items(&mut tx, store.id, &body.item_ids).await?;
    let read = load_one(&mut tx, store).await?;
    tx.commit().await?;
    tracing::info!(id = read.id, items = read.items.len(), "store created");
    Ok(success_one(read))
}

/// GET /stores
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let stores = StoreService::list(&mut tx).await?;
    let ids: Vec<i64> = stores.iter().map(|s| s.id).collect();
    let rows = StoreService::items_for(&mut tx, &ids).await?;
    tx.commit().await?;
    Ok(success_many(assemble(stores, rows)))
}

/// GET /stores/:id
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let store = StoreService::get(&mut tx, id).await?.ok_or_else(AppError::not_found)?;
    let read = load_one(&mut tx, store).await?;
    tx.commit().await?;
    Ok(success_one_ok(read))
}

/// PUT /stores/:id/items. All-or-nothing: on any failure the old set is untouched.
pub async fn replace_items(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(body): ValidatedJson<StoreItemsUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let store = StoreService::get_for_update(&mut tx, id)
        .await?
        .ok_or_else(AppError::not_found)?;
    ensure_items_exist(&mut tx, &body.item_ids).await?;
    StoreService::replace_items(&mut tx, id, &body.item_ids).await?;
    let read = load_one(&mut tx, store).await?;
    tx.commit().await?;
    tracing::info!(id, items = read.items.len(), "store items replaced");
    Ok(success_one_ok(read))
}

/// DELETE /stores/:id
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !StoreService::delete(&mut tx, id).await? {
        return Err(AppError::not_found());
    }
    tx.commit().await?;
    tracing::info!(id, "store deleted");
    Ok(StatusCode::NO_CONTENT)
}
