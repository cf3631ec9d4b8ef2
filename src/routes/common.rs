//! Common routes: health, readiness, version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Body for both outcomes of `/ready`: `{"status":"ok","database":"ok"}` with 200, or
/// `{"status":"degraded","database":"unavailable"}` with 503.
#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    // A pool checkout plus a trivial statement; no transaction needed.
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET / (health), GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn version_reports_crate_metadata() {
        let Json(body) = version().await;
        let v = serde_json::to_value(body).unwrap();
        assert_eq!(v["name"], "store-api");
        assert!(v["version"].is_string());
    }

    #[test]
    fn degraded_body_shape() {
        let body = ReadyBody { status: "degraded", database: "unavailable" };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "status": "degraded", "database": "unavailable" })
        );
    }
}
