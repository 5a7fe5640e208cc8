//! Background reclamation of expired store entries.
//!
//! Expiry is always enforced on read, so sweeping only bounds memory held by
//! keys that are never looked up again. The task keeps a weak reference to
//! the store and exits on its own once the store is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::store::ExpiringStore;

/// Handle to a running sweep task. Dropping it stops the task.
#[derive(Debug)]
pub struct Sweeper {
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawn a task that purges expired entries from `store` every `interval`.
    ///
    /// Returns `None` when `interval` is zero or no Tokio runtime is running.
    pub fn start<V>(store: &Arc<ExpiringStore<V>>, interval: Duration) -> Option<Self>
    where
        V: Clone + Send + Sync + 'static,
    {
        if interval.is_zero() {
            tracing::warn!("sweep interval is zero, expired entries will be dropped on read only");
            return None;
        }

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(?interval, "no tokio runtime available, expired entries will be dropped on read only");
            return None;
        };

        let store = Arc::downgrade(store);
        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let Some(store) = store.upgrade() else {
                    tracing::debug!("store dropped, stopping sweeper");
                    break;
                };

                let removed = store.purge_expired();
                tracing::debug!(removed, remaining = store.len(), "swept expired cache entries");
            }
        });

        Some(Self { handle })
    }

    /// Returns true while the sweep task is alive.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the sweep task.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const TTL: Duration = Duration::from_millis(100);
    const INTERVAL: Duration = Duration::from_millis(50);

    #[tokio::test(start_paused = true)]
    async fn test_sweeps_expired_entries() {
        let store = Arc::new(ExpiringStore::new(TTL));
        let sweeper = Sweeper::start(&store, INTERVAL).unwrap();

        store.insert("a", 1u32);
        sleep(Duration::from_millis(60)).await;
        store.insert("b", 2u32);
        assert_eq!(store.len(), 2);

        // "a" expires at 100ms and is reclaimed by the 100ms or 150ms tick; "b" lives until 160ms.
        sleep(Duration::from_millis(95)).await;
        assert_eq!(store.len(), 1);
        assert!(sweeper.is_running());

        sleep(Duration::from_millis(100)).await;
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_sweeping() {
        let store = Arc::new(ExpiringStore::new(TTL));
        let sweeper = Sweeper::start(&store, INTERVAL).unwrap();
        sweeper.stop();

        store.insert("a", 1u32);
        sleep(Duration::from_millis(300)).await;
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exits_when_store_dropped() {
        let store = Arc::new(ExpiringStore::<u32>::new(TTL));
        let sweeper = Sweeper::start(&store, INTERVAL).unwrap();
        drop(store);

        sleep(INTERVAL * 3).await;
        assert!(!sweeper.is_running());
    }

    #[tokio::test]
    async fn test_zero_interval_disabled() {
        let store = Arc::new(ExpiringStore::<u32>::new(TTL));
        assert!(Sweeper::start(&store, Duration::ZERO).is_none());
    }

    #[test]
    fn test_no_runtime() {
        let store = Arc::new(ExpiringStore::<u32>::new(TTL));
        assert!(Sweeper::start(&store, INTERVAL).is_none());
    }
}
