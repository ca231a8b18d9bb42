//! # board-cache
//!
//! Redis caching layer holding the most recent messages.
//!
//! The cache is a single capped list: writes `LPUSH` + `LTRIM`, reads
//! `LRANGE` a head slice. It is consulted before the durable store on
//! listing and mirrored into after a successful insert. It is allowed to be
//! cold or behind; the durable store remains the source of truth.
//!
//! ## Example
//!
//! ```ignore
//! use board_cache::{RedisMessageCache, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = RedisMessageCache::new(pool);
//! let recent = cache.list_messages(10).await?;
//! ```

pub mod pool;
pub mod recent;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export cache implementation
pub use recent::RedisMessageCache;
