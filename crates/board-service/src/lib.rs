//! # board-service
//!
//! Application layer: the message orchestrator and the API DTOs.
//!
//! The orchestrator merges the recent-messages cache with the durable store
//! on reads and sequences writes across both (durable first, cache mirror
//! best-effort). It works against the collaborator traits from board-core,
//! so any store/cache implementation can be plugged in, including test
//! stubs.

pub mod dto;
pub mod services;

pub use services::{MessageService, ServiceError, ServiceResult};
