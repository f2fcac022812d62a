//! Notification watermarks
//!
//! One persisted "last read" timestamp per notification category. A
//! watermark only moves when the user opens the matching list.

use chrono::{DateTime, SecondsFormat, Utc};
use shared::NotificationCategory;
use std::sync::Arc;

use crate::error::ClientResult;
use crate::storage::KeyValueStore;

/// Typed view over the watermark keys of a [`KeyValueStore`]
#[derive(Clone)]
pub struct WatermarkStore {
    store: Arc<dyn KeyValueStore>,
}

impl WatermarkStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Last-read time, `None` on first visit
    ///
    /// A stored value that is not an RFC 3339 timestamp counts as absent.
    pub fn last_read(&self, category: NotificationCategory) -> Option<DateTime<Utc>> {
        let raw = self.store.get(category.storage_key())?;
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(at) => Some(at.with_timezone(&Utc)),
            Err(e) => {
                tracing::warn!(key = category.storage_key(), value = %raw, "Invalid watermark: {}", e);
                None
            }
        }
    }

    pub fn mark_read(&self, category: NotificationCategory, at: DateTime<Utc>) -> ClientResult<()> {
        let value = at.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.store.set(category.storage_key(), &value)
    }

    /// Forget the watermark, the next count treats the category as unvisited
    pub fn reset(&self, category: NotificationCategory) -> ClientResult<()> {
        self.store.remove(category.storage_key())
    }
}
