//! Shared application state for all routes.

use sqlx::PgPool;

/// The pool is the only state shared between requests; each handler checks out its own
/// transaction from it.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
