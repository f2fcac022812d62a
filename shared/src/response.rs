//! API Response types
//!
//! Response envelopes of the order and payment endpoints

use crate::order::Order;
use serde::{Deserialize, Serialize};

/// `GET /orders?status=...` response
///
/// ```json
/// { "listData": [ { "id": "...", "status": "PROCESSING", ... } ], "total": 1 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub list_data: Vec<Order>,
    /// Total matching orders, when the backend paginates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// `POST /payments/retry` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRetryResponse {
    /// Payment gateway URL the buyer is redirected to
    pub payment_url: String,
}
