//! Decorator pattern: pizza toppings.
//!
//! A base pizza wrapped by zero or more topping decorators; `cost` sums the
//! base price and every surcharge in the stack.

pub mod pizza;

pub use pizza::{Pizza, Topping};
