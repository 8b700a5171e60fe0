//! Drive strategies and the vehicles configured with them.

use serde::{Deserialize, Serialize};

/// Drive capability variants. Closed set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveStrategy {
    Normal,
    Sports,
}

impl DriveStrategy {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "normal drive capability",
            Self::Sports => "sports drive capability (high speed)",
        }
    }
}

/// A vehicle configured with a drive strategy at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    name: String,
    strategy: DriveStrategy,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, strategy: DriveStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    pub fn sports() -> Self {
        Self::new("sports vehicle", DriveStrategy::Sports)
    }

    /// The off-road vehicle reuses the sports strategy. Quirk preserved
    /// from the write-up this example reproduces.
    pub fn off_road() -> Self {
        Self::new("off-road vehicle", DriveStrategy::Sports)
    }

    pub fn passenger() -> Self {
        Self::new("passenger vehicle", DriveStrategy::Normal)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> DriveStrategy {
        self.strategy
    }

    /// Drive using the configured strategy.
    pub fn drive(&self) -> &'static str {
        let description = self.strategy.description();
        tracing::info!(vehicle = %self.name, description, "driving");
        description
    }
}
