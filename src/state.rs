//! Shared application state for all routes.

use crate::config::ErrorDetail;
use crate::error::AppError;
use crate::model::{CoffeeStore, StoreError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CoffeeStore>,
    pub error_detail: ErrorDetail,
}

impl AppState {
    pub fn new(store: Arc<dyn CoffeeStore>) -> Self {
        AppState {
            store,
            error_detail: ErrorDetail::default(),
        }
    }

    pub fn with_error_detail(mut self, error_detail: ErrorDetail) -> Self {
        self.error_detail = error_detail;
        self
    }

    /// Convert a store failure into a response error under this state's detail policy.
    pub fn reject(&self, err: StoreError) -> AppError {
        AppError::from_store(err, self.error_detail)
    }
}
