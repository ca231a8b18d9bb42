//! Domain entities - core business objects

mod message;
mod reaction;

pub use message::{Message, NewMessage};
pub use reaction::{NewReaction, Reaction};
