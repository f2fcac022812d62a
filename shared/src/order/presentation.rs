//! Status presentation
//!
//! Maps an order status to the label, colour tone and follow-up action shown
//! on order cards. Pure lookups only.

use super::OrderStatus;
use serde::{Deserialize, Serialize};

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    /// Waiting on the buyer to pay
    Pending,
    /// Waiting on the seller
    Queued,
    InProgress,
    Success,
    Failed,
    /// Fallback for statuses this client does not know
    Neutral,
}

/// Follow-up action the buyer can take on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    ConfirmReceipt,
    RetryPayment,
}

impl ActionKind {
    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::ConfirmReceipt => "Đã nhận được hàng",
            ActionKind::RetryPayment => "Thanh toán lại",
        }
    }
}

/// How a status is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPresentation {
    pub label: &'static str,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_action: Option<ActionKind>,
}

impl StatusPresentation {
    /// Presentation for unknown or missing statuses
    pub const NEUTRAL: StatusPresentation = StatusPresentation {
        label: "",
        tone: Tone::Neutral,
        available_action: None,
    };
}

/// Describe a known status
pub fn describe_status(status: OrderStatus) -> StatusPresentation {
    let (label, tone) = match status {
        OrderStatus::Unpaid => ("Chưa thanh toán", Tone::Pending),
        OrderStatus::WaitingBanking => ("Chờ chuyển khoản", Tone::Pending),
        OrderStatus::Pending => ("Chờ xác nhận", Tone::Queued),
        OrderStatus::Processing => ("Đang xử lý", Tone::InProgress),
        OrderStatus::Packing => ("Đang đóng gói", Tone::InProgress),
        OrderStatus::ReadyToPick => ("Chờ lấy hàng", Tone::InProgress),
        OrderStatus::Delivering => ("Đang giao hàng", Tone::InProgress),
        OrderStatus::WaitingConfirmUser => ("Đã giao hàng", Tone::Success),
        OrderStatus::Completed => ("Hoàn thành", Tone::Success),
        OrderStatus::Cancelled => ("Đã hủy", Tone::Failed),
        OrderStatus::Complain => ("Đang khiếu nại", Tone::Failed),
        OrderStatus::CancelledByComplain => ("Đã hủy do khiếu nại", Tone::Failed),
    };

    let available_action = match status {
        OrderStatus::WaitingConfirmUser => Some(ActionKind::ConfirmReceipt),
        OrderStatus::Unpaid | OrderStatus::WaitingBanking => Some(ActionKind::RetryPayment),
        _ => None,
    };

    StatusPresentation {
        label,
        tone,
        available_action,
    }
}

/// Describe a status as received on the wire
///
/// Anything that is not an exact status identifier gets
/// [`StatusPresentation::NEUTRAL`].
pub fn describe_raw_status(raw: &str) -> StatusPresentation {
    raw.parse::<OrderStatus>()
        .map(describe_status)
        .unwrap_or(StatusPresentation::NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_real_tone() {
        for status in OrderStatus::ALL {
            let presentation = describe_status(status);
            assert_ne!(presentation.tone, Tone::Neutral, "{status}");
            assert!(!presentation.label.is_empty(), "{status}");
        }
    }

    #[test]
    fn test_tone_groups() {
        let tone = |s| describe_status(s).tone;
        assert_eq!(tone(OrderStatus::Unpaid), Tone::Pending);
        assert_eq!(tone(OrderStatus::WaitingBanking), Tone::Pending);
        assert_eq!(tone(OrderStatus::Pending), Tone::Queued);
        assert_eq!(tone(OrderStatus::ReadyToPick), Tone::InProgress);
        assert_eq!(tone(OrderStatus::Delivering), Tone::InProgress);
        assert_eq!(tone(OrderStatus::WaitingConfirmUser), Tone::Success);
        assert_eq!(tone(OrderStatus::Completed), Tone::Success);
        assert_eq!(tone(OrderStatus::Complain), Tone::Failed);
        assert_eq!(tone(OrderStatus::CancelledByComplain), Tone::Failed);
    }

    #[test]
    fn test_actions() {
        for status in OrderStatus::ALL {
            let expected = match status {
                OrderStatus::WaitingConfirmUser => Some(ActionKind::ConfirmReceipt),
                OrderStatus::Unpaid | OrderStatus::WaitingBanking => {
                    Some(ActionKind::RetryPayment)
                }
                _ => None,
            };
            assert_eq!(describe_status(status).available_action, expected, "{status}");
        }
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        assert_eq!(describe_raw_status(""), StatusPresentation::NEUTRAL);
        assert_eq!(describe_raw_status("REFUNDED"), StatusPresentation::NEUTRAL);
        assert_eq!(describe_raw_status("Đang xử lý"), StatusPresentation::NEUTRAL);
        assert_eq!(
            describe_raw_status("DELIVERING").tone,
            Tone::InProgress
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(describe_status(OrderStatus::Processing)).unwrap();
        assert_eq!(json["tone"], "in-progress");
        assert!(json.get("availableAction").is_none());

        let json = serde_json::to_value(describe_status(OrderStatus::Unpaid)).unwrap();
        assert_eq!(json["availableAction"], "retry-payment");
    }
}
