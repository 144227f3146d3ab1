//! Trailing-edge debounce driven by tokio timers

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Collapses a burst of triggers into one action after a quiet period.
///
/// Each trigger bumps a shared generation; a waiter only fires if its
/// generation is still the newest when the delay elapses. Clones share the
/// generation, so a clone can be moved into a spawned task.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a trigger and return its generation
    pub fn trigger(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Trigger, wait out the delay, then report whether this call won
    pub async fn settle(&self) -> bool {
        let generation = self.trigger();
        tokio::time::sleep(self.delay).await;
        self.is_current(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_single_trigger_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        assert!(debouncer.settle().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once() {
        let debouncer = Debouncer::new(Duration::from_millis(500));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let d = debouncer.clone();
            handles.push(tokio::spawn(async move { d.settle().await }));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let mut fired = 0;
        for handle in handles {
            if handle.await.unwrap() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_triggers_each_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        assert!(debouncer.settle().await);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(debouncer.settle().await);
    }
}
