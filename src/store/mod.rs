//! `CoffeeStore` backends: PostgreSQL for deployment, in-memory for tests and database-less runs.

pub mod memory;
pub mod postgres;

pub use memory::MemoryCoffeeStore;
pub use postgres::{clear, ensure_table, PgCoffeeStore};
