//! Coffee API: CRUD REST resource over a single PostgreSQL table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{AppConfig, ErrorDetail, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Coffee, CoffeePayload, CoffeeStore, StoreError};
pub use routes::{app, coffee_routes, common_routes};
pub use state::AppState;
pub use store::{ensure_table, MemoryCoffeeStore, PgCoffeeStore};
