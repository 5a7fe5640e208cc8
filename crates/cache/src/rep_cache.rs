//! Caching decorator over a [`RepFinder`].
//!
//! ### Behavior
//!
//! - **Key**: the address exactly as supplied; no trimming or case folding.
//! - **Hit**: a copy of the stored lookup is returned and the delegate is not called.
//! - **Miss**: the delegate is called with no lock held. A successful result is
//!   stored with a fresh TTL and returned unchanged; an error is returned
//!   unchanged and nothing is stored or evicted.
//! - **Concurrency**: concurrent misses for the same address each call the
//!   delegate; the last one to finish owns the stored entry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reps_core::{CacheConfig, Error, Lookup, RepFinder};

use crate::store::{ExpiringStore, StoreStats};
use crate::sweep::Sweeper;

/// A [`RepFinder`] that remembers successful lookups of its delegate for a fixed TTL.
#[derive(Debug)]
pub struct RepCache<F> {
    delegate: F,
    store: Arc<ExpiringStore<Lookup>>,
    sweeper: Option<Sweeper>,
}

impl<F: RepFinder> RepCache<F> {
    /// Wrap `delegate`, keeping results for `ttl`. Expired entries are only
    /// reclaimed when looked up again.
    pub fn new(delegate: F, ttl: Duration) -> Self {
        Self { delegate, store: Arc::new(ExpiringStore::new(ttl)), sweeper: None }
    }

    /// Wrap `delegate` and start a background sweep every `sweep_interval`.
    ///
    /// Must be called from within a Tokio runtime for the sweep to run;
    /// otherwise the cache falls back to read-time expiry only.
    pub fn with_sweep(delegate: F, ttl: Duration, sweep_interval: Duration) -> Self {
        let mut cache = Self::new(delegate, ttl);
        cache.sweeper = Sweeper::start(&cache.store, sweep_interval);
        cache
    }

    /// Wrap `delegate` using the TTL and sweep interval from `config`.
    pub fn from_config(delegate: F, config: &CacheConfig) -> Self {
        match config.sweep_interval() {
            Some(interval) => Self::with_sweep(delegate, config.ttl(), interval),
            None => Self::new(delegate, config.ttl()),
        }
    }

    /// Time-to-live applied to each stored lookup.
    pub fn ttl(&self) -> Duration {
        self.store.ttl()
    }

    /// Occupancy of the underlying store.
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    /// Returns true while a background sweep is running.
    pub fn is_sweeping(&self) -> bool {
        self.sweeper.as_ref().is_some_and(Sweeper::is_running)
    }

    /// Stop the background sweep, if any. Cached entries remain and still
    /// expire on read.
    pub fn stop_sweeper(&mut self) {
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.stop();
        }
    }
}

#[async_trait]
impl<F: RepFinder> RepFinder for RepCache<F> {
    async fn get_reps(&self, address: &str) -> Result<Lookup, Error> {
        if let Some(lookup) = self.store.get(address) {
            tracing::debug!(address, "rep cache hit");
            return Ok(lookup);
        }

        tracing::debug!(address, "rep cache miss, querying delegate");

        let lookup = self
            .delegate
            .get_reps(address)
            .await
            .inspect_err(|e| tracing::debug!(address, error = %e, "delegate lookup failed, not caching"))?;

        self.store.insert(address, lookup.clone());
        Ok(lookup)
    }
}
