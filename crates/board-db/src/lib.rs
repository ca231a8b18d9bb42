//! # board-db
//!
//! Durable store implementing the `MessageStore` trait with PostgreSQL via
//! SQLx. This is the source of truth: it alone assigns message ids and
//! creation timestamps (`gen_random_uuid()` / `now()` column defaults, see
//! `schema.sql`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use board_db::pool::{create_pool, DatabaseConfig};
//! use board_db::PgMessageStore;
//! use board_core::traits::MessageStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let store = PgMessageStore::new(pool);
//!
//!     let page = store.list_messages(0, 10).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod store;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use store::PgMessageStore;
