//! Resource routes for items, customers, orders, and stores.

use crate::handlers::{customers, items, orders, stores};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(items::list).post(items::create))
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/:id",
            get(customers::read).patch(customers::update).delete(customers::delete),
        )
        .route("/customers/:id/orders", get(customers::orders))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/stores", get(stores::list).post(stores::create))
        .route("/stores/:id", get(stores::read).delete(stores::delete))
        .route("/stores/:id/items", put(stores::replace_items))
        .with_state(state)
}
