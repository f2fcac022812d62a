// bliss-client/tests/common/mod.rs
// Test helpers shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use bliss_client::{ClientError, ClientResult, OrderApi};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use shared::{Order, OrderDetail, OrderFilter, PaymentRetryResponse};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub fn order(id: &str, status: &str, created_at: DateTime<Utc>) -> Order {
    Order {
        id: id.to_string(),
        code: format!("CB-{id}"),
        status: status.to_string(),
        created_at,
        price: 250_000.0,
        quantity: 1,
        name: "Nến thơm Vanilla".to_string(),
        image: None,
        kind: None,
    }
}

pub fn detail(order: Order) -> OrderDetail {
    OrderDetail {
        order,
        items: Vec::new(),
        shipping_address: Some("12 Lê Lợi, Q1".to_string()),
        payment_method: Some("COD".to_string()),
        note: None,
        updated_at: None,
    }
}

/// In-memory order backend
///
/// Responses are computed from the current order list when the call
/// finishes. Queued delays are consumed one per call, in call order.
#[derive(Default)]
pub struct FakeOrderApi {
    orders: Mutex<Vec<Order>>,
    details: Mutex<HashMap<String, OrderDetail>>,
    delays: Mutex<VecDeque<Duration>>,
    failing: AtomicBool,
    pub list_calls: AtomicUsize,
    pub all_calls: AtomicUsize,
}

impl FakeOrderApi {
    pub fn new(orders: Vec<Order>) -> Arc<Self> {
        let api = Self::default();
        *api.orders.lock() = orders;
        Arc::new(api)
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        *self.orders.lock() = orders;
    }

    pub fn insert_detail(&self, detail: OrderDetail) {
        self.details
            .lock()
            .insert(detail.order.id.clone(), detail);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn push_delay(&self, delay: Duration) {
        self.delays.lock().push_back(delay);
    }

    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> ClientResult<()> {
        let delay = self.delays.lock().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("503: backend unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderApi for FakeOrderApi {
    async fn list_orders(&self, filter: OrderFilter) -> ClientResult<Vec<Order>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(self
            .orders
            .lock()
            .iter()
            .filter(|order| filter.matches(&order.status))
            .cloned()
            .collect())
    }

    async fn all_orders(&self) -> ClientResult<Vec<Order>> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(self.orders.lock().clone())
    }

    async fn order_detail(&self, id: &str) -> ClientResult<OrderDetail> {
        self.respond().await?;
        self.details
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("order {id}")))
    }

    async fn confirm_receipt(&self, id: &str) -> ClientResult<Order> {
        self.respond().await?;
        let mut orders = self.orders.lock();
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("order {id}")))?;
        order.status = "COMPLETED".to_string();
        Ok(order.clone())
    }

    async fn retry_payment(&self, id: &str) -> ClientResult<PaymentRetryResponse> {
        self.respond().await?;
        Ok(PaymentRetryResponse {
            payment_url: format!("https://pay.example.com/{id}"),
        })
    }
}
