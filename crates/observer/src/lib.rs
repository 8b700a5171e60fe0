//! Observer pattern: store stock notification.
//!
//! A [`StockObservable`] holds a mutable stock count and an ordered registry
//! of subscribers. A positive stock update notifies every subscriber in
//! registration order; non-positive updates are stored silently.
//!
//! Subscribers are a **closed set** (email and mobile alerts); there is no
//! open extensibility and none is intended.

pub mod stock;
pub mod subscriber;

pub use stock::{Delivery, StockObservable};
pub use subscriber::{AlertSubscriber, StockAlert, SubscriberId};
