//! Order lifecycle status
//!
//! The wire identifiers are stable and shared with the backend order service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order lifecycle status
///
/// No numeric rank is defined between statuses. Grouping for display is done
/// by [`Tone`](super::Tone), not by position in the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created, payment not started
    Unpaid,
    /// Waiting for a bank transfer to arrive
    WaitingBanking,
    /// Paid, waiting for the seller to accept
    Pending,
    Processing,
    Packing,
    ReadyToPick,
    Delivering,
    /// Delivered, waiting for the buyer to confirm receipt
    WaitingConfirmUser,
    Completed,
    Cancelled,
    /// Buyer opened a complaint / exchange request
    Complain,
    CancelledByComplain,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 12] = [
        OrderStatus::Unpaid,
        OrderStatus::WaitingBanking,
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Packing,
        OrderStatus::ReadyToPick,
        OrderStatus::Delivering,
        OrderStatus::WaitingConfirmUser,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Complain,
        OrderStatus::CancelledByComplain,
    ];

    /// Wire identifier
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Unpaid => "UNPAID",
            OrderStatus::WaitingBanking => "WAITING_BANKING",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Packing => "PACKING",
            OrderStatus::ReadyToPick => "READY_TO_PICK",
            OrderStatus::Delivering => "DELIVERING",
            OrderStatus::WaitingConfirmUser => "WAITING_CONFIRM_USER",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Complain => "COMPLAIN",
            OrderStatus::CancelledByComplain => "CANCELLED_BY_COMPLAIN",
        }
    }

    /// No further transitions happen from these statuses
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::CancelledByComplain
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a wire string is not one of the known statuses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
