//! Runtime configuration types.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8010";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// How much of a store failure is returned to the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorDetail {
    /// Generic message in the body; full detail only in logs.
    #[default]
    Redact,
    /// Store message passed through verbatim.
    Expose,
}

impl FromStr for ErrorDetail {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redact" => Ok(ErrorDetail::Redact),
            "expose" => Ok(ErrorDetail::Expose),
            _ => Err(ConfigError::Invalid {
                key: "COFFEE_ERROR_DETAIL",
                value: s.to_string(),
            }),
        }
    }
}

/// Backing store selected at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::Invalid {
                key: "COFFEE_STORE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: PgConnectOptions,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit: usize,
    pub error_detail: ErrorDetail,
    pub store: StoreKind,
}
