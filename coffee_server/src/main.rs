//! Coffee API server: reads configuration from the environment (and `.env`), connects the
//! store, ensures the `coffee` table exists, and serves the API.
//!
//! Run from repo root: `cargo run -p coffee-server`

use coffee_api::{app, ensure_table, AppConfig, AppState, CoffeeStore, MemoryCoffeeStore, PgCoffeeStore, StoreKind};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coffee_api=info,coffee_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn CoffeeStore> = match config.store {
        StoreKind::Postgres => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(config.database.clone())
                .await?;
            ensure_table(&pool).await?;
            Arc::new(PgCoffeeStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryCoffeeStore::new())
        }
    };

    let state = AppState::new(store).with_error_detail(config.error_detail);
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
