//! Orderbook price levels with decimal precision
//!
//! Depth responses carry levels as bare two-element arrays
//! (`[price, amount]`), so levels are decoded positionally through a
//! fixed-arity tuple rather than by field name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::serde_util::deserialize_decimal;

/// A single price level in the orderbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LevelTuple", into = "LevelTuple")]
pub struct DepthLevel {
    /// Price of this level
    pub price: Decimal,
    /// Amount available at this price
    pub amount: Decimal,
}

/// Wire form of a level: `[price, amount]`
#[derive(Clone, Copy, Serialize, Deserialize)]
struct LevelTuple(
    #[serde(deserialize_with = "deserialize_decimal")] Decimal,
    #[serde(deserialize_with = "deserialize_decimal")] Decimal,
);

impl From<LevelTuple> for DepthLevel {
    fn from(LevelTuple(price, amount): LevelTuple) -> Self {
        Self { price, amount }
    }
}

impl From<DepthLevel> for LevelTuple {
    fn from(level: DepthLevel) -> Self {
        Self(level.price, level.amount)
    }
}

impl DepthLevel {
    /// Create a new price level
    pub fn new(price: Decimal, amount: Decimal) -> Self {
        Self { price, amount }
    }

    /// Quote-currency value of this level (price × amount)
    pub fn notional(&self) -> Decimal {
        self.price * self.amount
    }

    /// Check if this level has zero amount
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}
