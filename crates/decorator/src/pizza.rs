//! Pizzas and the topping decorators stacked on them.

use serde::{Deserialize, Serialize};

/// Topping decorator variants. Closed set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    ExtraCheese,
    Mushroom,
}

impl Topping {
    pub fn surcharge(&self) -> u32 {
        match self {
            Self::ExtraCheese => 10,
            Self::Mushroom => 15,
        }
    }
}

/// A pizza: either a plain base or a topping wrapped around another pizza.
///
/// The recursive variant is the decorator; stacking order does not change
/// the cost but is preserved in the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pizza {
    Margherita,
    VegDelight,
    With(Topping, Box<Pizza>),
}

impl Pizza {
    /// Wrap this pizza in one more topping.
    pub fn with(self, topping: Topping) -> Self {
        Self::With(topping, Box::new(self))
    }

    /// Base price plus every surcharge in the decorator stack.
    pub fn cost(&self) -> u32 {
        match self {
            Self::Margherita => 100,
            Self::VegDelight => 120,
            Self::With(topping, inner) => topping.surcharge() + inner.cost(),
        }
    }
}
