//! Route handlers

pub mod health;
pub mod messages;
pub mod reactions;
