//! Demo: push three records through the info -> debug -> error chain.

use gof_chain::{LogLevel, LogProcessor};
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

    let mut chain = LogProcessor::standard_chain();
    chain.log(LogLevel::Error, "exception happened");
    chain.log(LogLevel::Debug, "need to debug this");
    chain.log(LogLevel::Info, "just for info");
}
