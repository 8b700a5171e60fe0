//! Chain of Responsibility pattern: linked log processors.
//!
//! Each processor handles records at its own level and forwards the rest to
//! the next link; a record no link accepts falls off the end of the chain.

pub mod processor;

pub use processor::{LogLevel, LogProcessor};
