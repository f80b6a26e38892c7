//! The coffee entity and the store contract every backend implements.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A persisted coffee. `id` is assigned by the store on insert and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coffee {
    pub id: i64,
    pub name: String,
}

/// Request body for create and update. Any `id` in the body is ignored.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CoffeePayload {
    #[serde(default)]
    pub name: String,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("coffee not found")]
    NotFound,
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

/// Data operations on the coffee table. Implementations are shared across requests as
/// `Arc<dyn CoffeeStore>` and scope each call to a single statement.
#[async_trait]
pub trait CoffeeStore: Send + Sync {
    /// Row with `id`, or `StoreError::NotFound`.
    async fn fetch(&self, id: i64) -> Result<Coffee, StoreError>;

    /// Create a row; the store assigns the id.
    async fn insert(&self, name: &str) -> Result<Coffee, StoreError>;

    /// Overwrite the name of `id`. A missing row is not an error.
    async fn update(&self, id: i64, name: &str) -> Result<(), StoreError>;

    /// Hard delete of `id`. A missing row is not an error.
    async fn remove(&self, id: i64) -> Result<(), StoreError>;

    /// Up to `limit` rows starting at `offset`, ordered by id.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Coffee>, StoreError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Names must be non-empty.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::Constraint("name must not be empty".into()));
    }
    Ok(())
}
