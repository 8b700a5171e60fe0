//! Demo: a USER client is denied, then an ADMIN client succeeds.
//!
//! The denial is reported and the run continues; the process still exits 0.

use gof_proxy::{EmployeeDao, EmployeeDaoProxy, EmployeeId, EmployeeRecord, InMemoryEmployeeDao};
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

    let mut dao = EmployeeDaoProxy::new(InMemoryEmployeeDao::new());
    let id = EmployeeId::new();

    if let Err(err) = dao.create("USER", EmployeeRecord::new(id, "Ada")) {
        tracing::warn!(%err, "operation rejected");
    }

    match dao.create("ADMIN", EmployeeRecord::new(id, "Ada")) {
        Ok(()) => tracing::info!("operation successful"),
        Err(err) => tracing::warn!(%err, "operation rejected"),
    }
}
