//! Business logic services

pub mod error;
pub mod message;

// Re-export for convenience
pub use error::{ServiceError, ServiceResult};
pub use message::{remaining_window, MessageService};
