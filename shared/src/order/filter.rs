//! Order list filter tabs

use super::OrderStatus;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status filter exposed as tabs on the order list
///
/// Every filter other than [`OrderFilter::All`] names exactly one
/// [`OrderStatus`]. On the wire `All` is the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderFilter {
    #[default]
    All,
    WaitingBanking,
    Processing,
    Delivering,
    WaitingConfirmUser,
    Completed,
    Cancelled,
}

impl OrderFilter {
    /// Tabs in display order
    pub const TABS: [OrderFilter; 7] = [
        OrderFilter::All,
        OrderFilter::WaitingBanking,
        OrderFilter::Processing,
        OrderFilter::Delivering,
        OrderFilter::WaitingConfirmUser,
        OrderFilter::Completed,
        OrderFilter::Cancelled,
    ];

    /// The status this tab selects, `None` for all
    pub fn status(self) -> Option<OrderStatus> {
        match self {
            OrderFilter::All => None,
            OrderFilter::WaitingBanking => Some(OrderStatus::WaitingBanking),
            OrderFilter::Processing => Some(OrderStatus::Processing),
            OrderFilter::Delivering => Some(OrderStatus::Delivering),
            OrderFilter::WaitingConfirmUser => Some(OrderStatus::WaitingConfirmUser),
            OrderFilter::Completed => Some(OrderStatus::Completed),
            OrderFilter::Cancelled => Some(OrderStatus::Cancelled),
        }
    }

    /// Value sent as the `status` query parameter
    pub fn as_query(self) -> &'static str {
        self.status().map(OrderStatus::as_str).unwrap_or("")
    }

    pub fn from_query(value: &str) -> Option<Self> {
        OrderFilter::TABS
            .into_iter()
            .find(|filter| filter.as_query() == value)
    }

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            OrderFilter::All => "Tất cả",
            OrderFilter::WaitingBanking => "Chờ thanh toán",
            OrderFilter::Processing => "Đang xử lý",
            OrderFilter::Delivering => "Đang giao",
            OrderFilter::WaitingConfirmUser => "Chờ xác nhận",
            OrderFilter::Completed => "Hoàn thành",
            OrderFilter::Cancelled => "Đã hủy",
        }
    }

    /// Whether an order with the given wire status belongs on this tab
    pub fn matches(self, raw_status: &str) -> bool {
        match self.status() {
            None => true,
            Some(status) => raw_status == status.as_str(),
        }
    }
}

impl fmt::Display for OrderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl Serialize for OrderFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_query())
    }
}

impl<'de> Deserialize<'de> for OrderFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        OrderFilter::from_query(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown order filter: {value}")))
    }
}
