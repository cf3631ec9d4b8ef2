//! Customer CRUD plus the customer's order list.

use crate::error::AppError;
use crate::extractors::{EntityId, ValidatedJson};
use crate::response::{success_many, success_one, success_one_ok};
use crate::schemas::{CustomerCreate, CustomerRead, CustomerUpdate, OrderRead};
use crate::service::{CustomerService, OrderService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// POST /customers
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CustomerCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let customer = CustomerService::create(&mut tx, &body).await?;
    tx.commit().await?;
    tracing::info!(id = customer.id, "customer created");
    Ok(success_one(CustomerRead::from(customer)))
}

/// GET /customers
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let rows = CustomerService::list(&mut tx).await?;
    tx.commit().await?;
    Ok(success_many(rows.into_iter().map(CustomerRead::from).collect()))
}

/// GET /customers/:id
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let customer = CustomerService::get(&mut tx, id).await?.ok_or_else(AppError::not_found)?;
    tx.commit().await?;
    Ok(success_one_ok(CustomerRead::from(customer)))
}

/// PATCH /customers/:id
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(body): ValidatedJson<CustomerUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let customer = CustomerService::update(&mut tx, id, &body)
        .await?
        .ok_or_else(AppError::not_found)?;
    tx.commit().await?;
    Ok(success_one_ok(CustomerRead::from(customer)))
}

/// DELETE /customers/:id
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !CustomerService::delete(&mut tx, id).await? {
        return Err(AppError::not_found());
    }
    tx.commit().await?;
    tracing::info!(id, "customer deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /customers/:id/orders
pub async fn orders(State(state): State<AppState>, EntityId(id): EntityId) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !CustomerService::exists(&mut tx, id).await? {
        return Err(AppError::not_found());
    }
    let rows = OrderService::list_for_customer(&mut tx, id).await?;
    tx.commit().await?;
    Ok(success_many(rows.into_iter().map(OrderRead::from).collect()))
}
