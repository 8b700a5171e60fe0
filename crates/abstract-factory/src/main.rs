//! Demo: pick the luxury factory, build a Mercedes, report its mileage.

use anyhow::Context;
use gof_abstract_factory::VehicleFactory;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let factory = VehicleFactory::for_class("Luxury").context("selecting factory")?;
    let vehicle = factory.vehicle("MercedesBenz").context("selecting model")?;

    tracing::info!(
        ?vehicle,
        average_mileage = vehicle.average_mileage(),
        "vehicle built"
    );
    Ok(())
}
