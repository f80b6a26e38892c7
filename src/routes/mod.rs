//! Route tables and the assembled application router.

pub mod coffee;
pub mod common;

pub use coffee::coffee_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Coffee and status routes with body size limiting and request tracing.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(coffee_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
