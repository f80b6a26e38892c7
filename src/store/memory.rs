//! In-process store with the same semantics as the PostgreSQL table.

use crate::model::{validate_name, Coffee, CoffeeStore, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, String>,
    last_id: i64,
    failure: Option<String>,
}

impl Inner {
    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

/// Rows keyed by id; ids start at 1 and are never reused until `clear`.
#[derive(Default)]
pub struct MemoryCoffeeStore {
    inner: RwLock<Inner>,
}

impl MemoryCoffeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with `message` until `recover` is called.
    pub async fn fail_with(&self, message: impl Into<String>) {
        self.inner.write().await.failure = Some(message.into());
    }

    pub async fn recover(&self) {
        self.inner.write().await.failure = None;
    }

    /// Drop all rows and restart ids at 1.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.rows.clear();
        inner.last_id = 0;
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CoffeeStore for MemoryCoffeeStore {
    async fn fetch(&self, id: i64) -> Result<Coffee, StoreError> {
        let inner = self.inner.read().await;
        inner.check()?;
        let name = inner.rows.get(&id).ok_or(StoreError::NotFound)?;
        Ok(Coffee {
            id,
            name: name.clone(),
        })
    }

    async fn insert(&self, name: &str) -> Result<Coffee, StoreError> {
        let mut inner = self.inner.write().await;
        inner.check()?;
        validate_name(name)?;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, name.to_string());
        Ok(Coffee {
            id,
            name: name.to_string(),
        })
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.check()?;
        validate_name(name)?;
        if let Some(existing) = inner.rows.get_mut(&id) {
            *existing = name.to_string();
        }
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.check()?;
        inner.rows.remove(&id);
        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Coffee>, StoreError> {
        let inner = self.inner.read().await;
        inner.check()?;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(inner
            .rows
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(id, name)| Coffee {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.read().await.check()
    }
}
