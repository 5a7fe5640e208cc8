//! Time-bounded caching for representative lookups.
//!
//! [`RepCache`] wraps any [`reps_core::RepFinder`] and serves repeated
//! lookups for the same address from memory until their TTL elapses:
//!
//! - Keys are the raw address strings, compared exactly
//! - Only successful lookups are stored; failures pass through untouched
//! - Expiry is checked on every read, and an optional [`Sweeper`] task
//!   reclaims expired entries in the background

pub mod rep_cache;
pub mod store;
pub mod sweep;

pub use rep_cache::RepCache;
pub use store::{ExpiringStore, StoreStats};
pub use sweep::Sweeper;
