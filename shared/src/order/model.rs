//! Order Model
//!
//! Read-only snapshots of orders as returned by the backend order service.

use super::{OrderStatus, StatusPresentation, describe_raw_status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Order summary as listed by `/orders` and `/orders/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID (the backend sends either a string or a number)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Human-facing order code
    #[serde(default)]
    pub code: String,
    /// Raw wire status. Usually an [`OrderStatus`] identifier, but the
    /// backend also emits localized or qualified status strings.
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// Total price in VND
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i32,
    /// Name of the first product in the order
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Order type (e.g. normal / exchange)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Order {
    /// The status, if it is an exact wire identifier
    pub fn order_status(&self) -> Option<OrderStatus> {
        self.status.parse().ok()
    }

    pub fn presentation(&self) -> StatusPresentation {
        describe_raw_status(&self.status)
    }

    /// Created strictly after `watermark`; always true without a watermark
    pub fn is_newer_than(&self, watermark: Option<DateTime<Utc>>) -> bool {
        watermark.is_none_or(|mark| self.created_at > mark)
    }
}

/// Line item inside an order detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub product_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Full order as returned by `/orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(s) => s,
        Repr::Int(n) => n.to_string(),
        Repr::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Tone;
    use chrono::TimeZone;

    #[test]
    fn test_order_from_backend_json() {
        let json = r#"{
            "id": 42,
            "code": "CB-0042",
            "status": "DELIVERING",
            "createdAt": "2024-05-01T08:30:00.000Z",
            "price": 350000,
            "quantity": 2,
            "name": "Nến thơm Lavender",
            "image": "https://cdn.example.com/lavender.jpg",
            "type": "normal"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "42");
        assert_eq!(order.order_status(), Some(OrderStatus::Delivering));
        assert_eq!(order.presentation().tone, Tone::InProgress);
        assert_eq!(order.kind.as_deref(), Some("normal"));
        assert_eq!(
            order.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_localized_status_is_kept_raw() {
        let json = r#"{"id":"a1","status":"Đang xử lý","createdAt":"2024-05-01T08:30:00Z"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, "Đang xử lý");
        assert_eq!(order.order_status(), None);
        assert_eq!(order.presentation(), StatusPresentation::NEUTRAL);
    }

    #[test]
    fn test_missing_created_at_is_rejected() {
        let json = r#"{"id":"a1","status":"PENDING"}"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }

    #[test]
    fn test_is_newer_than() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let order = Order {
            id: "1".into(),
            code: String::new(),
            status: "PENDING".into(),
            created_at: t,
            price: 0.0,
            quantity: 1,
            name: String::new(),
            image: None,
            kind: None,
        };
        assert!(order.is_newer_than(None));
        assert!(!order.is_newer_than(Some(t)));
        assert!(order.is_newer_than(Some(t - chrono::Duration::seconds(1))));
    }

    #[test]
    fn test_detail_flattens_order() {
        let json = r#"{
            "id": "o-9",
            "code": "CB-9",
            "status": "WAITING_CONFIRM_USER",
            "createdAt": "2024-05-01T08:30:00Z",
            "items": [{"name": "Nến sáp đậu nành", "quantity": 1, "price": 120000}],
            "shippingAddress": "12 Lê Lợi, Q1",
            "paymentMethod": "BANKING"
        }"#;
        let detail: OrderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.order.id, "o-9");
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.payment_method.as_deref(), Some("BANKING"));
        assert!(detail.updated_at.is_none());
    }
}
