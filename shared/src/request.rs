//! Request types for the order and payment endpoints

use serde::{Deserialize, Serialize};

/// `POST /payments/retry` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPaymentRequest {
    pub order_id: String,
}
