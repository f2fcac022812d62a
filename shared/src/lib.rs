//! Shared types for CandleBliss
//!
//! Order wire model, lifecycle status table, presentation rules and the
//! unread-notification rule. Used by the storefront and back-office clients.

pub mod notification;
pub mod order;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use notification::{NotificationCategory, RelevantStatuses, count_unread};
pub use order::{
    ActionKind, Order, OrderDetail, OrderFilter, OrderLine, OrderStatus, StatusPresentation, Tone,
    describe_raw_status, describe_status,
};
pub use request::RetryPaymentRequest;
pub use response::{OrderListResponse, PaymentRetryResponse};
