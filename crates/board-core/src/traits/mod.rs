//! Collaborator traits (ports)

mod stores;

pub use stores::{MessageCache, MessageStore, StoreResult};
