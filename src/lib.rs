//! store-api: REST backend for items, customers, orders, and stores on PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, MIGRATOR};
pub use routes::{api_routes, common_routes};
pub use state::AppState;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application router: health routes, resource routes, request tracing, and a body
/// size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
