//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs (with validation where the API enforces it)
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{CreateMessageRequest, CreateReactionRequest};

// Re-export commonly used response types
pub use responses::{
    format_timestamp, HealthChecks, HealthResponse, ListMessagesResponse, MessageResponse,
    ReactionResponse, ReadinessResponse, TIMESTAMP_FORMAT,
};
