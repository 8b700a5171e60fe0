//! Demo: read a pound scale through the kilogram adapter.

use gof_adapter::{PoundsToKgAdapter, WarehouseScale, WeightMachineAdapter};
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

    let adapter = PoundsToKgAdapter::new(WarehouseScale::new(28.0));
    tracing::info!(weight_in_kg = adapter.weight_in_kg(), "scale read");
}
