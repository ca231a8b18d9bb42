//! Store implementations
//!
//! PostgreSQL implementation of the `MessageStore` trait defined in
//! board-core.

mod error;
mod message;

pub use error::map_db_error;
pub use message::PgMessageStore;
