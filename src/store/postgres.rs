//! PostgreSQL store: parameterized statements against the `coffee` table.

use crate::model::{validate_name, Coffee, CoffeeStore, StoreError};
use async_trait::async_trait;
use sqlx::PgPool;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS coffee (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL CHECK (name <> '')
    )
"#;
const SELECT_BY_ID: &str = "SELECT id, name FROM coffee WHERE id = $1";
const INSERT: &str = "INSERT INTO coffee (name) VALUES ($1) RETURNING id, name";
const UPDATE: &str = "UPDATE coffee SET name = $1 WHERE id = $2";
const DELETE: &str = "DELETE FROM coffee WHERE id = $1";
const SELECT_PAGE: &str = "SELECT id, name FROM coffee ORDER BY id LIMIT $1 OFFSET $2";

/// Create the `coffee` table if it does not exist. Safe to call on every startup.
pub async fn ensure_table(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    Ok(())
}

/// Delete every row and restart id assignment at 1.
pub async fn clear(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query("TRUNCATE coffee RESTART IDENTITY").execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgCoffeeStore {
    pool: PgPool,
}

impl PgCoffeeStore {
    pub fn new(pool: PgPool) -> Self {
        PgCoffeeStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CoffeeStore for PgCoffeeStore {
    async fn fetch(&self, id: i64) -> Result<Coffee, StoreError> {
        tracing::debug!(sql = SELECT_BY_ID, id, "query");
        let row: Option<(i64, String)> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let (id, name) = row.ok_or(StoreError::NotFound)?;
        Ok(Coffee { id, name })
    }

    async fn insert(&self, name: &str) -> Result<Coffee, StoreError> {
        validate_name(name)?;
        tracing::debug!(sql = INSERT, name, "query");
        let (id, name): (i64, String) = sqlx::query_as(INSERT)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(Coffee { id, name })
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        tracing::debug!(sql = UPDATE, id, name, "query");
        let result = sqlx::query(UPDATE).bind(name).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "update matched no rows");
        }
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), StoreError> {
        tracing::debug!(sql = DELETE, id, "query");
        sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Coffee>, StoreError> {
        tracing::debug!(sql = SELECT_PAGE, offset, limit, "query");
        let rows: Vec<(i64, String)> = sqlx::query_as(SELECT_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|(id, name)| Coffee { id, name }).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
