//! Abstract Factory pattern: vehicle selection.
//!
//! A factory-of-factories keyed by vehicle class ("Luxury"/"Ordinary"),
//! each producing a vehicle by model name. Unknown names are errors rather
//! than nulls.

pub mod catalog;

pub use catalog::{CatalogError, Vehicle, VehicleClass, VehicleFactory};
