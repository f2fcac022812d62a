//! Bliss Client - order status and notification client for CandleBliss
//!
//! Talks to the CandleBliss backend over HTTP and keeps the client-side
//! order state: the order store, the unread-notification badges, the cart
//! badge and the browsing history, backed by a persisted key/value file.

pub mod actions;
pub mod api;
pub mod badge;
pub mod config;
pub mod error;
pub mod history;
pub mod http;
pub mod logger;
pub mod notifications;
pub mod storage;
pub mod store;
pub mod watermark;

pub use actions::{ActionOutcome, OrderActions};
pub use api::{HttpOrderApi, OrderApi};
pub use badge::CartBadge;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, FailureKind};
pub use history::HistoryCache;
pub use http::{HttpClient, NetworkHttpClient};
pub use notifications::{NotificationCounter, UnreadCounts};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{OrderState, OrderStore};
pub use watermark::WatermarkStore;

// Re-export shared types for convenience
pub use shared::{
    ActionKind, NotificationCategory, Order, OrderDetail, OrderFilter, OrderStatus,
    RelevantStatuses, StatusPresentation, Tone, describe_raw_status, describe_status,
};
