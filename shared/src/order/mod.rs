//! Order status model
//!
//! - `status`: lifecycle statuses and their wire identifiers
//! - `filter`: the subset of statuses exposed as list tabs
//! - `presentation`: label / tone / action for each status
//! - `model`: order snapshots returned by the backend

pub mod filter;
pub mod model;
pub mod presentation;
pub mod status;

// Re-exports
pub use filter::OrderFilter;
pub use model::{Order, OrderDetail, OrderLine};
pub use presentation::{ActionKind, StatusPresentation, Tone, describe_raw_status, describe_status};
pub use status::{OrderStatus, UnknownStatus};
