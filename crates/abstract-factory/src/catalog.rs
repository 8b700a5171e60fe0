//! Vehicle catalog: classes, models, and the factory chain selecting them.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selection failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown vehicle class: {0}")]
    UnknownClass(String),

    /// The model name is not produced by the selected class's factory.
    #[error("unknown model for {class:?} factory: {model}")]
    UnknownModel { class: VehicleClass, model: String },
}

/// Vehicle class, selecting which concrete factory is used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Luxury,
    Ordinary,
}

impl FromStr for VehicleClass {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Luxury" => Ok(Self::Luxury),
            "Ordinary" => Ok(Self::Ordinary),
            other => Err(CatalogError::UnknownClass(other.to_string())),
        }
    }
}

/// Concrete vehicle models. Closed set across both factories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vehicle {
    MercedesBenz,
    Bmw,
    Audi,
    Hyundai,
    Nissan,
}

impl Vehicle {
    /// Average mileage figure, the one attribute the demo reports.
    pub fn average_mileage(&self) -> u32 {
        match self {
            Self::MercedesBenz => 15,
            Self::Bmw => 17,
            Self::Audi => 18,
            Self::Hyundai => 25,
            Self::Nissan => 30,
        }
    }
}

/// Factory for one vehicle class.
///
/// Obtained from [`VehicleFactory::for_class`] (the factory-of-factories
/// step), then asked for a model by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VehicleFactory {
    class: VehicleClass,
}

impl VehicleFactory {
    /// Select the factory for a class name.
    pub fn for_class(input: &str) -> Result<Self, CatalogError> {
        let class = input.parse()?;
        Ok(Self { class })
    }

    pub fn new(class: VehicleClass) -> Self {
        Self { class }
    }

    pub fn class(&self) -> VehicleClass {
        self.class
    }

    /// Produce a vehicle by model name.
    ///
    /// Each factory only knows its own class's models; asking the ordinary
    /// factory for a luxury model is an error.
    pub fn vehicle(&self, model: &str) -> Result<Vehicle, CatalogError> {
        let vehicle = match (self.class, model) {
            (VehicleClass::Luxury, "MercedesBenz") => Vehicle::MercedesBenz,
            (VehicleClass::Luxury, "BMW") => Vehicle::Bmw,
            (VehicleClass::Luxury, "Audi") => Vehicle::Audi,
            (VehicleClass::Ordinary, "Hyundai") => Vehicle::Hyundai,
            (VehicleClass::Ordinary, "Nissan") => Vehicle::Nissan,
            (class, other) => {
                return Err(CatalogError::UnknownModel {
                    class,
                    model: other.to_string(),
                });
            }
        };
        Ok(vehicle)
    }
}
