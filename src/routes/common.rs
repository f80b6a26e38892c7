//! Common routes: health, readiness, version, OpenAPI.

use crate::handlers::common::{health, openapi_json, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, GET /ready (store round trip), GET /version, GET /openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
