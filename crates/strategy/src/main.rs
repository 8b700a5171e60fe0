//! Demo: drive the three stock vehicles.

use gof_strategy::Vehicle;
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

    for vehicle in [Vehicle::sports(), Vehicle::off_road(), Vehicle::passenger()] {
        vehicle.drive();
    }
}
