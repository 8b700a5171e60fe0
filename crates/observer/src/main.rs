//! Demo: the store script from the pattern write-up.
//!
//! Registers two email subscribers and one mobile subscriber, then runs the
//! fixed stock sequence 10, -10, 100. Expect two notification rounds of
//! three alerts each.

use gof_observer::{AlertSubscriber, StockObservable};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let mut stock = StockObservable::new();
    stock.add(AlertSubscriber::email("abc@example.com"));
    stock.add(AlertSubscriber::email("xyz@example.com"));
    stock.add(AlertSubscriber::mobile("vishal_sahu18"));

    stock.set_stock_count(10);
    stock.set_stock_count(-10);
    stock.set_stock_count(100);

    tracing::info!(
        deliveries = stock.deliveries().len(),
        stock_count = stock.stock_count(),
        "store run finished"
    );
}
