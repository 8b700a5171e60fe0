//! Adapter pattern: weight conversion.
//!
//! A pound-denominated weight machine adapted to the kilogram interface the
//! rest of the (hypothetical) system wants to consume.

pub mod weight;

pub use weight::{PoundsToKgAdapter, WarehouseScale, WeightMachine, WeightMachineAdapter};
