//! Coffee CRUD routes.

use crate::handlers::coffee::{create_coffee, delete_coffee, get_coffee, list_coffees, update_coffee};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn coffee_routes(state: AppState) -> Router {
    Router::new()
        .route("/coffees", get(list_coffees))
        .route("/coffee", post(create_coffee))
        .route(
            "/coffee/:id",
            get(get_coffee).put(update_coffee).delete(delete_coffee),
        )
        .with_state(state)
}
