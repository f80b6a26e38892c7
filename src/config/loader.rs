//! Load configuration from environment variables.

use crate::config::types::*;
use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::net::SocketAddr;
use std::str::FromStr;

impl AppConfig {
    /// Read configuration from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = match get("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url)?,
            None => connect_options(&get)?,
        };
        let listen_addr = get("COFFEE_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = listen_addr.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            key: "COFFEE_LISTEN_ADDR",
            value: listen_addr.clone(),
        })?;

        Ok(AppConfig {
            database,
            listen_addr,
            max_connections: parse_or("COFFEE_MAX_CONNECTIONS", get("COFFEE_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            body_limit: parse_or("COFFEE_BODY_LIMIT", get("COFFEE_BODY_LIMIT"), DEFAULT_BODY_LIMIT)?,
            error_detail: get("COFFEE_ERROR_DETAIL")
                .map(|v| v.parse::<ErrorDetail>())
                .transpose()?
                .unwrap_or_default(),
            store: get("COFFEE_STORE").map(|v| v.parse::<StoreKind>()).transpose()?.unwrap_or_default(),
        })
    }
}

/// Assemble connection options from the discrete `APP_DB_*` variables.
fn connect_options<G>(get: &G) -> Result<PgConnectOptions, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let port = parse_or("APP_DB_PORT", get("APP_DB_PORT"), 5432u16)?;
    let sslmode = get("APP_DB_SSLMODE").unwrap_or_else(|| "disable".into());
    let ssl_mode = PgSslMode::from_str(&sslmode).map_err(|_| ConfigError::Invalid {
        key: "APP_DB_SSLMODE",
        value: sslmode.clone(),
    })?;

    let mut options = PgConnectOptions::new()
        .host(&get("APP_DB_HOST").unwrap_or_else(|| "localhost".into()))
        .port(port)
        .username(&get("APP_DB_USERNAME").unwrap_or_else(|| "postgres".into()))
        .database(&get("APP_DB_NAME").unwrap_or_else(|| "coffeeshop".into()))
        .ssl_mode(ssl_mode);
    if let Some(password) = get("APP_DB_PASSWORD") {
        options = options.password(&password);
    }
    Ok(options)
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(default),
    }
}
