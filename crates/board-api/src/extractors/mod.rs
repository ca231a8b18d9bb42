//! Axum extractors for request handling

mod json_body;
mod validated;

pub use json_body::JsonBody;
pub use validated::ValidatedJson;
