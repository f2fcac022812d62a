//! Order watch
//!
//! Loads `.env`, fetches the order list and keeps the notification badges
//! refreshed until Ctrl-C.
//!
//! ```bash
//! BLISS_API_URL=http://localhost:8000/api BLISS_API_TOKEN=... \
//!     cargo run -p bliss-client --example order_watch
//! ```

use std::sync::Arc;

use bliss_client::{
    ClientConfig, HttpOrderApi, NotificationCounter, OrderApi, OrderFilter, OrderStore,
    WatermarkStore, describe_raw_status, logger,
};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init_logger();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting to CandleBliss backend");

    let api: Arc<dyn OrderApi> = Arc::new(HttpOrderApi::new(config.build_http_client()?));
    let store = Arc::new(config.open_store());

    let orders = OrderStore::new(api.clone());
    if orders.get_orders(OrderFilter::All).await {
        for order in orders.orders() {
            let presentation = describe_raw_status(&order.status);
            println!(
                "{:<12} {:<24} {:>10.0} {}",
                order.code,
                presentation.label,
                order.price,
                order.name
            );
        }
    }

    let counter = Arc::new(
        NotificationCounter::new(api, WatermarkStore::new(store))
            .with_poll_interval(config.poll_period()),
    );
    let mut counts = counter.subscribe();

    let shutdown = CancellationToken::new();
    let poller = counter.spawn_poller(shutdown.clone());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = counts.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = *counts.borrow_and_update();
                println!("unread: orders={} exchanges={}", current.orders, current.exchanges);
            }
        }
    }

    shutdown.cancel();
    poller.await?;
    Ok(())
}
