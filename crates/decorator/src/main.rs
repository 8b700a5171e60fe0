//! Demo: a margherita with extra cheese and mushroom.

use gof_decorator::{Pizza, Topping};
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

    let pizza = Pizza::Margherita
        .with(Topping::ExtraCheese)
        .with(Topping::Mushroom);

    tracing::info!(cost = pizza.cost(), "pizza priced");
}
