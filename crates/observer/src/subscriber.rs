//! Subscriber variants and the alert payload they receive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity handle for a registered subscriber.
///
/// The registry hands one out per `add` call and removes by it. Two
/// registrations of value-equal subscribers get distinct ids, so duplicates
/// are permitted and never collapsed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberId(Uuid);

impl SubscriberId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Payload delivered to every subscriber on a qualifying stock change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlert {
    /// Stock count at the moment of notification. May be zero or negative
    /// when `notify_subscribers` is invoked directly.
    pub stock_count: i64,
    /// When the notification occurred (business time).
    pub occurred_at: DateTime<Utc>,
}

/// A party interested in stock changes.
///
/// Closed set: the store supports exactly email and mobile alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum AlertSubscriber {
    Email { address: String },
    Mobile { username: String },
}

impl AlertSubscriber {
    pub fn email(address: impl Into<String>) -> Self {
        Self::Email {
            address: address.into(),
        }
    }

    pub fn mobile(username: impl Into<String>) -> Self {
        Self::Mobile {
            username: username.into(),
        }
    }

    /// Deliver `alert` to this subscriber.
    ///
    /// Side effect only: emits a structured log line referencing the stored
    /// address or username. Never fails.
    pub fn notify(&self, alert: &StockAlert) {
        match self {
            Self::Email { address } => {
                tracing::info!(
                    address = %address,
                    stock_count = alert.stock_count,
                    "email alert sent"
                );
            }
            Self::Mobile { username } => {
                tracing::info!(
                    username = %username,
                    stock_count = alert.stock_count,
                    "mobile alert sent"
                );
            }
        }
    }

    /// Render the message this subscriber receives for `alert`.
    ///
    /// Wording is illustrative, not a contract; the registry records it in
    /// its delivery log so tests can assert on captured state instead of
    /// scraping stdout.
    pub fn render_message(&self, alert: &StockAlert) -> String {
        match self {
            Self::Email { address } => format!(
                "email sent to {address}: product is back in stock ({} available)",
                alert.stock_count
            ),
            Self::Mobile { username } => format!(
                "msg sent to {username}: product is back in stock, hurry up!"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_alert(stock_count: i64) -> StockAlert {
        StockAlert {
            stock_count,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn email_message_references_address() {
        let subscriber = AlertSubscriber::email("abc@example.com");
        let message = subscriber.render_message(&test_alert(10));
        assert!(message.contains("abc@example.com"));
        assert!(message.contains("10"));
    }

    #[test]
    fn mobile_message_references_username() {
        let subscriber = AlertSubscriber::mobile("vishal_sahu18");
        let message = subscriber.render_message(&test_alert(10));
        assert!(message.contains("vishal_sahu18"));
    }

    #[test]
    fn subscriber_ids_are_unique() {
        assert_ne!(SubscriberId::new(), SubscriberId::new());
    }

    #[test]
    fn alert_serializes_with_stock_count() {
        let alert = test_alert(7);
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["stock_count"], 7);
    }
}
