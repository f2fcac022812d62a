//! Order API
//!
//! Typed access to the order and payment endpoints. `OrderApi` is the seam
//! the store, the notification counter and the action runner depend on.

use async_trait::async_trait;
use shared::{
    Order, OrderDetail, OrderFilter, OrderListResponse, PaymentRetryResponse, RetryPaymentRequest,
};

use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, NetworkHttpClient};

/// Backend order service
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// `GET /orders?status=<filter>`
    async fn list_orders(&self, filter: OrderFilter) -> ClientResult<Vec<Order>>;

    /// `GET /orders/all`
    async fn all_orders(&self) -> ClientResult<Vec<Order>>;

    /// `GET /orders/{id}`
    async fn order_detail(&self, id: &str) -> ClientResult<OrderDetail>;

    /// `POST /orders/{id}/confirm-receipt`
    async fn confirm_receipt(&self, id: &str) -> ClientResult<Order>;

    /// `POST /payments/retry`
    async fn retry_payment(&self, id: &str) -> ClientResult<PaymentRetryResponse>;
}

/// [`OrderApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpOrderApi<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> HttpOrderApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Endpoints acting on one user's order need a session token
    fn require_session(&self) -> ClientResult<()> {
        match self.http.token() {
            Some(token) if !token.is_empty() => Ok(()),
            _ => Err(ClientError::Unauthorized),
        }
    }
}

fn order_path(id: &str) -> ClientResult<String> {
    if id.is_empty() || id.contains('/') {
        return Err(ClientError::Validation(format!("Invalid order id: {id:?}")));
    }
    Ok(format!("/orders/{id}"))
}

#[async_trait]
impl<H: HttpClient> OrderApi for HttpOrderApi<H> {
    async fn list_orders(&self, filter: OrderFilter) -> ClientResult<Vec<Order>> {
        let response: OrderListResponse = match filter {
            OrderFilter::All => self.http.get("/orders").await?,
            _ => {
                self.http
                    .get_with_query("/orders", &[("status", filter.as_query())])
                    .await?
            }
        };
        Ok(response.list_data)
    }

    async fn all_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get("/orders/all").await
    }

    async fn order_detail(&self, id: &str) -> ClientResult<OrderDetail> {
        self.require_session()?;
        self.http.get(&order_path(id)?).await
    }

    async fn confirm_receipt(&self, id: &str) -> ClientResult<Order> {
        self.require_session()?;
        let path = format!("{}/confirm-receipt", order_path(id)?);
        self.http.post_empty(&path).await
    }

    async fn retry_payment(&self, id: &str) -> ClientResult<PaymentRetryResponse> {
        self.require_session()?;
        let request = RetryPaymentRequest {
            order_id: id.to_string(),
        };
        self.http.post("/payments/retry", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_path() {
        assert_eq!(order_path("o-1").unwrap(), "/orders/o-1");
        assert!(matches!(order_path(""), Err(ClientError::Validation(_))));
        assert!(matches!(
            order_path("../all"),
            Err(ClientError::Validation(_))
        ));
    }
}
