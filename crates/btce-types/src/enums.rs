//! Trade type, sort order, and book side enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order direction for `Trade` requests and trade history records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl TradeType {
    /// Returns the type name as used in API parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorting for history queries (server default is `Desc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the order as used in API parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the book a public trade executed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSide {
    /// Trade hit a bid
    Bid,
    /// Trade lifted an ask
    Ask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_type_wire_names() {
        assert_eq!(TradeType::Buy.to_string(), "buy");
        assert_eq!(TradeType::Sell.as_str(), "sell");

        let parsed: TradeType = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(parsed, TradeType::Sell);
    }

    #[test]
    fn test_sort_order_wire_names() {
        assert_eq!(SortOrder::Asc.to_string(), "ASC");
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"DESC\"");
    }

    #[test]
    fn test_book_side_parse() {
        let side: BookSide = serde_json::from_str("\"ask\"").unwrap();
        assert_eq!(side, BookSide::Ask);
    }
}
