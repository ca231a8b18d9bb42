//! Entity <-> model mappers

mod message;
