//! # board-core
//!
//! Domain layer containing the message entities, storage collaborator traits,
//! and the shared storage error. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Message, NewMessage, NewReaction, Reaction};
pub use error::StoreError;
pub use traits::{MessageCache, MessageStore, StoreResult};
