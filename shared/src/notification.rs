//! Unread-notification rule
//!
//! An order is "unread" in a category when its status matches one of the
//! category's markers and it was created after the category's last-read
//! watermark. Without a watermark every matching order counts.

use crate::order::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Notification badge category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Orders,
    Exchanges,
}

impl NotificationCategory {
    pub const ALL: [NotificationCategory; 2] =
        [NotificationCategory::Orders, NotificationCategory::Exchanges];

    /// Key of the persisted last-read watermark
    pub fn storage_key(self) -> &'static str {
        match self {
            NotificationCategory::Orders => "ordersLastRead",
            NotificationCategory::Exchanges => "exchangesLastRead",
        }
    }
}

/// Status markers relevant to one notification category
///
/// Matching is lenient: a status matches a marker when it equals it or
/// contains it. `COMPLAIN` therefore also matches `CANCELLED_BY_COMPLAIN`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelevantStatuses {
    markers: BTreeSet<String>,
}

impl RelevantStatuses {
    /// Empty markers are dropped, they would match everything
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    /// New and in-progress orders
    pub fn orders() -> Self {
        Self::new([
            OrderStatus::Pending.as_str(),
            OrderStatus::Processing.as_str(),
            "Đơn hàng vừa được tạo",
            "Đang xử lý",
        ])
    }

    /// Complaints, exchange and refund requests
    pub fn exchanges() -> Self {
        Self::new([
            OrderStatus::Complain.as_str(),
            "Yêu cầu đổi trả",
            "Chờ hoàn tiền",
        ])
    }

    pub fn for_category(category: NotificationCategory) -> Self {
        match category {
            NotificationCategory::Orders => Self::orders(),
            NotificationCategory::Exchanges => Self::exchanges(),
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    pub fn matches(&self, status: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| status == marker || status.contains(marker.as_str()))
    }
}

/// Count orders that match `relevant` and are newer than `watermark`
pub fn count_unread(
    orders: &[Order],
    watermark: Option<DateTime<Utc>>,
    relevant: &RelevantStatuses,
) -> usize {
    orders
        .iter()
        .filter(|order| relevant.matches(&order.status))
        .filter(|order| order.is_newer_than(watermark))
        .count()
}
