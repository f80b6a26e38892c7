//! HTTP handlers for coffee CRUD and service status.

pub mod coffee;
pub mod common;
pub use coffee::*;
pub use common::*;
