//! Cart badge
//!
//! Persisted item count shown on the cart icon. Every change is published so
//! all views showing the badge stay in sync.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::ClientResult;
use crate::storage::KeyValueStore;

pub const CART_BADGE_KEY: &str = "cartBadge";

pub struct CartBadge {
    store: Arc<dyn KeyValueStore>,
    sender: watch::Sender<u32>,
    /// Serializes read-modify-write updates
    write_lock: Mutex<()>,
}

impl CartBadge {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = Self::read(store.as_ref());
        let (sender, _) = watch::channel(initial);
        Self {
            store,
            sender,
            write_lock: Mutex::new(()),
        }
    }

    /// Missing or non-numeric values read as zero
    fn read(store: &dyn KeyValueStore) -> u32 {
        store
            .get(CART_BADGE_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn count(&self) -> u32 {
        Self::read(self.store.as_ref())
    }

    pub fn set_count(&self, count: u32) -> ClientResult<()> {
        let _guard = self.write_lock.lock();
        self.write(count)
    }

    /// Add `by` items, returning the new count
    pub fn increment(&self, by: u32) -> ClientResult<u32> {
        let _guard = self.write_lock.lock();
        let next = self.count().saturating_add(by);
        self.write(next)?;
        Ok(next)
    }

    fn write(&self, count: u32) -> ClientResult<()> {
        self.store.set(CART_BADGE_KEY, &count.to_string())?;
        self.sender.send_replace(count);
        tracing::debug!(count, "Cart badge updated");
        Ok(())
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.set_count(0)
    }

    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.sender.subscribe()
    }
}
