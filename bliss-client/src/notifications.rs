//! Unread-notification counter
//!
//! Polls the full order snapshot and derives unread counts for the order and
//! exchange badges from the persisted watermarks.
//!
//! Every refresh takes a ticket from a monotonic sequence. A refresh result is
//! applied only if its ticket is still the latest one, so a slow poll can
//! never overwrite a newer poll or a "mark as read".

use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use shared::{NotificationCategory, RelevantStatuses, count_unread};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::api::OrderApi;
use crate::config::DEFAULT_POLL_INTERVAL_SECS;
use crate::error::ClientResult;
use crate::watermark::WatermarkStore;

const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Badge counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnreadCounts {
    pub orders: usize,
    pub exchanges: usize,
}

impl UnreadCounts {
    pub fn get(&self, category: NotificationCategory) -> usize {
        match category {
            NotificationCategory::Orders => self.orders,
            NotificationCategory::Exchanges => self.exchanges,
        }
    }

    fn set(&mut self, category: NotificationCategory, count: usize) {
        match category {
            NotificationCategory::Orders => self.orders = count,
            NotificationCategory::Exchanges => self.exchanges = count,
        }
    }

    pub fn total(&self) -> usize {
        self.orders + self.exchanges
    }
}

pub struct NotificationCounter {
    api: Arc<dyn OrderApi>,
    watermarks: WatermarkStore,
    orders_relevant: RelevantStatuses,
    exchanges_relevant: RelevantStatuses,
    poll_interval: Duration,
    /// Latest issued ticket
    sequence: Mutex<u64>,
    counts: watch::Sender<UnreadCounts>,
}

impl NotificationCounter {
    pub fn new(api: Arc<dyn OrderApi>, watermarks: WatermarkStore) -> Self {
        let (counts, _) = watch::channel(UnreadCounts::default());
        Self {
            api,
            watermarks,
            orders_relevant: RelevantStatuses::orders(),
            exchanges_relevant: RelevantStatuses::exchanges(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            sequence: Mutex::new(0),
            counts,
        }
    }

    /// Poll period, never shorter than one second
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
        self
    }

    /// Replace the status markers of one category
    pub fn with_relevant_statuses(
        mut self,
        category: NotificationCategory,
        relevant: RelevantStatuses,
    ) -> Self {
        match category {
            NotificationCategory::Orders => self.orders_relevant = relevant,
            NotificationCategory::Exchanges => self.exchanges_relevant = relevant,
        }
        self
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn counts(&self) -> UnreadCounts {
        *self.counts.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<UnreadCounts> {
        self.counts.subscribe()
    }

    fn next_ticket(&self) -> u64 {
        let mut sequence = self.sequence.lock();
        *sequence += 1;
        *sequence
    }

    /// Fetch the order snapshot and recompute both counts
    ///
    /// A failed fetch resets both counts to zero. Returns the counts that are
    /// current once this call finishes.
    pub async fn refresh(&self) -> UnreadCounts {
        let ticket = self.next_ticket();

        let fetched = self.api.all_orders().await;

        let sequence = self.sequence.lock();
        if *sequence != ticket {
            tracing::debug!(ticket, latest = *sequence, "Discarding stale notification refresh");
            return self.counts();
        }

        let next = match fetched {
            Ok(orders) => UnreadCounts {
                orders: count_unread(
                    &orders,
                    self.watermarks.last_read(NotificationCategory::Orders),
                    &self.orders_relevant,
                ),
                exchanges: count_unread(
                    &orders,
                    self.watermarks.last_read(NotificationCategory::Exchanges),
                    &self.exchanges_relevant,
                ),
            },
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "Failed to refresh order notifications: {}", e);
                UnreadCounts::default()
            }
        };

        self.counts.send_replace(next);
        drop(sequence);
        next
    }

    /// Record that the user opened a list and zero its badge right away
    ///
    /// The badge is cleared even if persisting the watermark fails; the
    /// storage error is still returned.
    pub fn mark_read(&self, category: NotificationCategory) -> ClientResult<()> {
        let mut sequence = self.sequence.lock();
        *sequence += 1;

        let result = self.watermarks.mark_read(category, Utc::now());
        self.counts.send_modify(|counts| counts.set(category, 0));
        drop(sequence);

        if let Err(e) = &result {
            tracing::warn!(?category, "Failed to persist watermark: {}", e);
        }
        result
    }

    pub fn mark_orders_read(&self) -> ClientResult<()> {
        self.mark_read(NotificationCategory::Orders)
    }

    pub fn mark_exchanges_read(&self) -> ClientResult<()> {
        self.mark_read(NotificationCategory::Exchanges)
    }

    /// Start polling: one refresh now, then one per poll interval
    ///
    /// Cancelling `shutdown` stops the loop, including a refresh in flight.
    pub fn spawn_poller(self: &Arc<Self>, shutdown: CancellationToken) -> JoinHandle<()> {
        let counter = Arc::clone(self);
        tokio::spawn(async move { counter.run(shutdown).await })
    }

    async fn run(&self, shutdown: CancellationToken) {
        tracing::info!(interval = ?self.poll_interval, "Notification poller started");

        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                _ = shutdown.cancelled() => break,
                counts = self.refresh() => {
                    tracing::debug!(orders = counts.orders, exchanges = counts.exchanges, "Notification counts refreshed");
                }
            }
        }

        tracing::info!("Notification poller stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_counts_accessors() {
        let mut counts = UnreadCounts::default();
        counts.set(NotificationCategory::Exchanges, 3);
        counts.set(NotificationCategory::Orders, 2);
        assert_eq!(counts.get(NotificationCategory::Exchanges), 3);
        assert_eq!(counts.get(NotificationCategory::Orders), 2);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_poll_interval_has_a_floor() {
        let api: Arc<dyn OrderApi> = Arc::new(crate::api::HttpOrderApi::new(
            crate::config::ClientConfig::new("http://localhost/api")
                .build_http_client()
                .unwrap(),
        ));
        let watermarks = WatermarkStore::new(Arc::new(crate::storage::MemoryStore::new()));
        let counter = NotificationCounter::new(api, watermarks);

        let counter = counter.with_poll_interval(Duration::ZERO);
        assert_eq!(counter.poll_interval(), Duration::from_secs(1));

        let counter = counter.with_poll_interval(Duration::from_secs(30));
        assert_eq!(counter.poll_interval(), Duration::from_secs(30));
    }
}
