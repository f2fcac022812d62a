//! Order store
//!
//! Client-side container for the order list, the opened order detail and the
//! active status tab. Every mutation is a full replace driven by the latest
//! successful fetch. Failed fetches are logged and leave the state alone.

use parking_lot::Mutex;
use shared::{Order, OrderDetail, OrderFilter};
use std::sync::Arc;
use tokio::sync::watch;

use crate::api::OrderApi;

/// Snapshot of the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderState {
    pub orders: Vec<Order>,
    pub order_details: Option<OrderDetail>,
    /// Filter the current `orders` were fetched with
    pub active_filter: OrderFilter,
}

pub struct OrderStore {
    api: Arc<dyn OrderApi>,
    state: watch::Sender<OrderState>,
    /// Latest issued ticket for list fetches
    list_sequence: Mutex<u64>,
    /// Latest issued ticket for detail fetches
    detail_sequence: Mutex<u64>,
}

fn issue(sequence: &Mutex<u64>) -> u64 {
    let mut latest = sequence.lock();
    *latest += 1;
    *latest
}

impl OrderStore {
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        let (state, _) = watch::channel(OrderState::default());
        Self {
            api,
            state,
            list_sequence: Mutex::new(0),
            detail_sequence: Mutex::new(0),
        }
    }

    /// Fetch the orders for a tab
    ///
    /// Returns `true` if the result was applied. A response is dropped when
    /// a later `get_orders` was started before it arrived.
    pub async fn get_orders(&self, filter: OrderFilter) -> bool {
        let ticket = issue(&self.list_sequence);
        tracing::debug!(filter = filter.as_query(), ticket, "Fetching orders");

        let fetched = self.api.list_orders(filter).await;

        let latest = self.list_sequence.lock();
        if *latest != ticket {
            tracing::debug!(ticket, latest = *latest, "Discarding stale order list");
            return false;
        }

        match fetched {
            Ok(orders) => {
                tracing::debug!(count = orders.len(), "Order list updated");
                self.state.send_modify(|state| {
                    state.orders = orders;
                    state.active_filter = filter;
                });
                true
            }
            Err(e) => {
                tracing::warn!(filter = filter.as_query(), kind = ?e.kind(), "Failed to fetch orders: {}", e);
                false
            }
        }
    }

    /// Fetch one order's detail
    ///
    /// On failure a detail for the same order is kept; a detail for a
    /// different order is cleared so it is never shown under the wrong id.
    pub async fn get_details(&self, order_id: &str) -> bool {
        let ticket = issue(&self.detail_sequence);
        tracing::debug!(order_id, ticket, "Fetching order detail");

        let fetched = self.api.order_detail(order_id).await;

        let latest = self.detail_sequence.lock();
        if *latest != ticket {
            tracing::debug!(ticket, latest = *latest, "Discarding stale order detail");
            return false;
        }

        match fetched {
            Ok(detail) => {
                self.state
                    .send_modify(|state| state.order_details = Some(detail));
                true
            }
            Err(e) => {
                tracing::warn!(order_id, kind = ?e.kind(), "Failed to fetch order detail: {}", e);
                self.state.send_if_modified(|state| {
                    let stale = state
                        .order_details
                        .as_ref()
                        .is_some_and(|detail| detail.order.id != order_id);
                    if stale {
                        state.order_details = None;
                    }
                    stale
                });
                false
            }
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.state.borrow().orders.clone()
    }

    pub fn order_details(&self) -> Option<OrderDetail> {
        self.state.borrow().order_details.clone()
    }

    pub fn active_filter(&self) -> OrderFilter {
        self.state.borrow().active_filter
    }

    pub fn snapshot(&self) -> OrderState {
        self.state.borrow().clone()
    }

    /// Loaded orders narrowed to a tab, without a fetch
    pub fn orders_matching(&self, filter: OrderFilter) -> Vec<Order> {
        self.state
            .borrow()
            .orders
            .iter()
            .filter(|order| filter.matches(&order.status))
            .cloned()
            .collect()
    }

    pub fn subscribe(&self) -> watch::Receiver<OrderState> {
        self.state.subscribe()
    }

    /// Reset to the empty state, e.g. on sign-out
    ///
    /// Fetches still in flight are discarded when they complete.
    pub fn clear(&self) {
        issue(&self.list_sequence);
        issue(&self.detail_sequence);
        self.state.send_replace(OrderState::default());
    }
}
