//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries so
//! idle keys do not hold capacity until someone happens to touch them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheEngine;

/// Spawns a background task that sweeps expired entries.
///
/// Each pass takes the same exclusive lock as foreground operations and
/// removes at most `batch_size` entries, so a large backlog of expired
/// keys is drained over several passes instead of one long lock hold.
///
/// # Arguments
/// * `cache` - Shared cache engine
/// * `interval_secs` - Seconds between sweep passes
/// * `batch_size` - Maximum removals per pass
///
/// # Returns
/// A JoinHandle used to abort the task during graceful shutdown.
pub fn spawn_sweep_task(
    cache: Arc<Mutex<CacheEngine>>,
    interval_secs: u64,
    batch_size: usize,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task: every {}s, up to {} removals per pass",
            interval_secs, batch_size
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.lock().await;
                cache_guard.sweep_expired(batch_size)
            };

            if removed > 0 {
                info!("Expiry sweep removed {} entries", removed);
            } else {
                debug!("Expiry sweep found nothing to remove");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use std::time::Duration;

    fn shared_engine(capacity: usize) -> Arc<Mutex<CacheEngine>> {
        Arc::new(Mutex::new(CacheEngine::new(capacity, Arc::new(SystemClock))))
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = shared_engine(100);

        {
            let mut guard = cache.lock().await;
            guard
                .set("expire_soon".to_string(), "value".to_string(), Some(1))
                .unwrap();
        }

        let handle = spawn_sweep_task(cache.clone(), 1, 256);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let guard = cache.lock().await;
            assert_eq!(guard.len(), 0, "Expired entry should have been swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let cache = shared_engine(100);

        {
            let mut guard = cache.lock().await;
            guard
                .set("long_lived".to_string(), "value".to_string(), Some(3600))
                .unwrap();
            guard
                .set("eternal".to_string(), "value".to_string(), None)
                .unwrap();
        }

        let handle = spawn_sweep_task(cache.clone(), 1, 256);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut guard = cache.lock().await;
            assert_eq!(guard.get("long_lived").unwrap(), "value");
            assert_eq!(guard.get("eternal").unwrap(), "value");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = shared_engine(100);

        let handle = spawn_sweep_task(cache, 1, 256);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
    }
}
