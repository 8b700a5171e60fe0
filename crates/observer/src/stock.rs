//! Subject: the stock registry that fans alerts out to subscribers.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::subscriber::{AlertSubscriber, StockAlert, SubscriberId};

/// One notification that reached one subscriber.
///
/// The registry appends these in delivery order, which is registration
/// order within a single notification round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    subscriber_id: SubscriberId,
    message: String,
    alert: StockAlert,
}

impl Delivery {
    pub fn subscriber_id(&self) -> SubscriberId {
        self.subscriber_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn alert(&self) -> &StockAlert {
        &self.alert
    }
}

/// Subject: mutable stock count plus an ordered subscriber registry.
///
/// Notification rules:
/// - `set_stock_count(n)` with `n > 0` notifies every subscriber, in
///   registration order, synchronously.
/// - `set_stock_count(n)` with `n <= 0` stores the value and notifies no
///   one. The positive-only threshold is deliberate and load-bearing.
/// - The count is **not validated**; negative values are stored as-is.
#[derive(Debug, Default)]
pub struct StockObservable {
    stock_count: i64,
    subscribers: Vec<(SubscriberId, AlertSubscriber)>,
    deliveries: Vec<Delivery>,
}

impl StockObservable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; returns the handle used for removal.
    ///
    /// No duplicate check: registering a value-equal subscriber twice
    /// yields two entries (and two deliveries per notification round).
    pub fn add(&mut self, subscriber: AlertSubscriber) -> SubscriberId {
        let id = SubscriberId::new();
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove the first entry with `id`.
    ///
    /// Returns `false` (not an error) when no such entry exists.
    pub fn remove(&mut self, id: SubscriberId) -> bool {
        match self.subscribers.iter().position(|(sid, _)| *sid == id) {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Store `new_count` and notify subscribers when it is positive.
    pub fn set_stock_count(&mut self, new_count: i64) {
        self.stock_count = new_count;
        tracing::debug!(stock_count = new_count, "stock count updated");

        if new_count > 0 {
            self.notify_subscribers();
        }
    }

    pub fn stock_count(&self) -> i64 {
        self.stock_count
    }

    /// Notify every registered subscriber, in registration order.
    ///
    /// Public and unconditional: calling this directly delivers alerts even
    /// for a zero or negative count. No error isolation is required because
    /// subscriber notification cannot fail.
    pub fn notify_subscribers(&mut self) {
        let alert = StockAlert {
            stock_count: self.stock_count,
            occurred_at: Utc::now(),
        };

        for (id, subscriber) in &self.subscribers {
            subscriber.notify(&alert);
            self.deliveries.push(Delivery {
                subscriber_id: *id,
                message: subscriber.render_message(&alert),
                alert: alert.clone(),
            });
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Registered subscribers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SubscriberId, &AlertSubscriber)> {
        self.subscribers.iter().map(|(id, s)| (*id, s))
    }

    /// Every delivery made so far, oldest first.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_three_subscribers() -> (StockObservable, Vec<SubscriberId>) {
        let mut stock = StockObservable::new();
        let ids = vec![
            stock.add(AlertSubscriber::email("abc@example.com")),
            stock.add(AlertSubscriber::email("xyz@example.com")),
            stock.add(AlertSubscriber::mobile("vishal_sahu18")),
        ];
        (stock, ids)
    }

    #[test]
    fn positive_stock_notifies_every_subscriber_once_in_registration_order() {
        let (mut stock, ids) = store_with_three_subscribers();

        stock.set_stock_count(10);

        let delivered: Vec<SubscriberId> = stock
            .deliveries()
            .iter()
            .map(|d| d.subscriber_id())
            .collect();
        assert_eq!(delivered, ids);
    }

    #[test]
    fn non_positive_stock_notifies_no_one() {
        let (mut stock, _) = store_with_three_subscribers();

        stock.set_stock_count(0);
        stock.set_stock_count(-10);

        assert!(stock.deliveries().is_empty());
        assert_eq!(stock.stock_count(), -10);
    }

    #[test]
    fn negative_stock_is_stored_without_validation() {
        let mut stock = StockObservable::new();
        stock.set_stock_count(-42);
        assert_eq!(stock.stock_count(), -42);
    }

    #[test]
    fn store_scenario_delivers_six_alerts() {
        // 2 email + 1 mobile; 10 -> 3 notified, -10 -> 0, 100 -> 3.
        let (mut stock, ids) = store_with_three_subscribers();

        stock.set_stock_count(10);
        stock.set_stock_count(-10);
        stock.set_stock_count(100);

        assert_eq!(stock.deliveries().len(), 6);
        for id in ids {
            let per_subscriber = stock
                .deliveries()
                .iter()
                .filter(|d| d.subscriber_id() == id)
                .count();
            assert_eq!(per_subscriber, 2);
        }
    }

    #[test]
    fn duplicate_subscribers_are_kept_and_both_notified() {
        let mut stock = StockObservable::new();
        stock.add(AlertSubscriber::email("same@example.com"));
        stock.add(AlertSubscriber::email("same@example.com"));

        stock.set_stock_count(1);

        assert_eq!(stock.subscriber_count(), 2);
        assert_eq!(stock.deliveries().len(), 2);
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let (mut stock, _) = store_with_three_subscribers();

        assert!(!stock.remove(SubscriberId::new()));
        assert_eq!(stock.subscriber_count(), 3);
    }

    #[test]
    fn removed_subscriber_is_no_longer_notified() {
        let (mut stock, ids) = store_with_three_subscribers();

        assert!(stock.remove(ids[1]));
        stock.set_stock_count(5);

        assert_eq!(stock.subscriber_count(), 2);
        assert!(
            stock
                .deliveries()
                .iter()
                .all(|d| d.subscriber_id() != ids[1])
        );
    }

    #[test]
    fn direct_notify_is_unconditional() {
        let (mut stock, _) = store_with_three_subscribers();

        // Stock is still 0; a direct call delivers anyway.
        stock.notify_subscribers();

        assert_eq!(stock.deliveries().len(), 3);
        assert_eq!(stock.deliveries()[0].alert().stock_count, 0);
    }

    #[test]
    fn delivery_messages_reference_the_channel_endpoint() {
        let (mut stock, _) = store_with_three_subscribers();

        stock.set_stock_count(10);

        assert!(stock.deliveries()[0].message().contains("abc@example.com"));
        assert!(stock.deliveries()[2].message().contains("vishal_sahu18"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: set/get round-trips for any i64, including
            /// negative values and i64::MIN/MAX.
            #[test]
            fn set_then_get_round_trips(value in any::<i64>()) {
                let mut stock = StockObservable::new();
                stock.set_stock_count(value);
                prop_assert_eq!(stock.stock_count(), value);
            }

            /// Property: subscriber count equals adds minus successful
            /// removes.
            #[test]
            fn count_tracks_adds_minus_removes(adds in 0usize..16, removes in 0usize..16) {
                let mut stock = StockObservable::new();
                let ids: Vec<SubscriberId> = (0..adds)
                    .map(|i| stock.add(AlertSubscriber::mobile(format!("user_{i}"))))
                    .collect();

                let mut removed = 0;
                for id in ids.iter().take(removes) {
                    if stock.remove(*id) {
                        removed += 1;
                    }
                }
                // Unknown ids never change the count.
                stock.remove(SubscriberId::new());

                prop_assert_eq!(stock.subscriber_count(), adds - removed);
            }

            /// Property: a non-positive update never notifies anyone.
            #[test]
            fn non_positive_updates_never_notify(value in i64::MIN..=0, adds in 0usize..8) {
                let mut stock = StockObservable::new();
                for i in 0..adds {
                    stock.add(AlertSubscriber::email(format!("s{i}@example.com")));
                }

                stock.set_stock_count(value);

                prop_assert!(stock.deliveries().is_empty());
            }

            /// Property: a positive update notifies each subscriber
            /// exactly once.
            #[test]
            fn positive_updates_notify_each_subscriber_once(value in 1i64..=i64::MAX, adds in 0usize..8) {
                let mut stock = StockObservable::new();
                for i in 0..adds {
                    stock.add(AlertSubscriber::email(format!("s{i}@example.com")));
                }

                stock.set_stock_count(value);

                prop_assert_eq!(stock.deliveries().len(), adds);
            }
        }
    }
}
