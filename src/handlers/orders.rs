//! Order handlers: create and list.

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::response::{success_many, success_one};
use crate::schemas::{OrderCreate, OrderRead};
use crate::service::{CustomerService, OrderService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /orders. The customer must exist; otherwise the request is a client error.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<OrderCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !CustomerService::exists(&mut tx, body.customer_id).await? {
        return Err(AppError::Conflict(format!("Customer '{}' not found", body.customer_id)));
    }
    let order = OrderService::create(&mut tx, &body).await?;
    tx.commit().await?;
    tracing::info!(id = order.id, customer_id = order.customer_id, "order created");
    Ok(success_one(OrderRead::from(order)))
}

/// GET /orders
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let rows = OrderService::list(&mut tx).await?;
    tx.commit().await?;
    Ok(success_many(rows.into_iter().map(OrderRead::from).collect()))
}
