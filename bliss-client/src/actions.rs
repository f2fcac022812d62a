//! Order actions
//!
//! Runs the follow-up action offered for an order's status. Unlike list and
//! badge fetches, these touch checkout and delivery, so every failure is
//! returned to the caller.

use shared::{ActionKind, Order};
use std::sync::Arc;

use crate::api::OrderApi;
use crate::error::{ClientError, ClientResult};

/// Result of a successful action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Updated order after the buyer confirmed receipt
    ReceiptConfirmed(Order),
    /// Payment gateway URL to open
    PaymentRedirect(String),
}

pub struct OrderActions {
    api: Arc<dyn OrderApi>,
}

impl OrderActions {
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        Self { api }
    }

    /// Perform `action` on `order`
    ///
    /// The action must be the one offered for the order's current status,
    /// otherwise nothing is sent. Closed orders accept no action.
    pub async fn perform(&self, order: &Order, action: ActionKind) -> ClientResult<ActionOutcome> {
        if order.order_status().is_some_and(|status| status.is_terminal()) {
            return Err(ClientError::Validation(format!(
                "order {} is closed ({})",
                order.code, order.status
            )));
        }

        let offered = order.presentation().available_action;
        if offered != Some(action) {
            return Err(ClientError::Validation(format!(
                "{action:?} is not available for order {} in status {}",
                order.code, order.status
            )));
        }

        tracing::info!(order_id = %order.id, ?action, "Performing order action");
        let outcome = match action {
            ActionKind::ConfirmReceipt => self
                .api
                .confirm_receipt(&order.id)
                .await
                .map(ActionOutcome::ReceiptConfirmed),
            ActionKind::RetryPayment => self
                .api
                .retry_payment(&order.id)
                .await
                .map(|response| ActionOutcome::PaymentRedirect(response.payment_url)),
        };

        outcome.inspect_err(|e| {
            tracing::error!(order_id = %order.id, ?action, kind = ?e.kind(), "Order action failed: {}", e)
        })
    }
}
