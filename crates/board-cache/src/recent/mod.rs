//! Recent-messages cache

mod message_cache;

pub use message_cache::RedisMessageCache;
