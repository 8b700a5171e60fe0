//! Strategy pattern: vehicle driving behavior.
//!
//! Vehicles are configured with an interchangeable drive strategy instead of
//! overriding a drive method per subclass.

pub mod drive;

pub use drive::{DriveStrategy, Vehicle};
