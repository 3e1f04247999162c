//! Trading pair identifiers (btc_usd format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair identifier (lowercase `base_quote`, e.g. "btc_usd")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pair(String);

impl Pair {
    /// BTC/USD trading pair
    pub const BTC_USD: &'static str = "btc_usd";
    /// BTC/EUR trading pair
    pub const BTC_EUR: &'static str = "btc_eur";
    /// BTC/RUR trading pair
    pub const BTC_RUR: &'static str = "btc_rur";
    /// LTC/BTC trading pair
    pub const LTC_BTC: &'static str = "ltc_btc";
    /// LTC/USD trading pair
    pub const LTC_USD: &'static str = "ltc_usd";
    /// NMC/BTC trading pair
    pub const NMC_BTC: &'static str = "nmc_btc";

    /// Create a pair without validation
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the pair as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base currency (e.g., "btc" from "btc_usd")
    pub fn base(&self) -> Option<&str> {
        self.0.split('_').next()
    }

    /// Get the quote currency (e.g., "usd" from "btc_usd")
    pub fn quote(&self) -> Option<&str> {
        self.0.split('_').nth(1)
    }
}

impl FromStr for Pair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('_')
            .ok_or_else(|| PairParseError::MissingSeparator(s.to_string()))?;

        if base.is_empty() || quote.is_empty() {
            return Err(PairParseError::EmptyPart(s.to_string()));
        }

        let valid = |part: &str| part.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid(base) || !valid(quote) {
            return Err(PairParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pair {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pair {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Pair {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Error parsing a pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairParseError {
    #[error("Pair must contain '_': {0}")]
    MissingSeparator(String),

    #[error("Invalid pair format: {0}")]
    InvalidFormat(String),

    #[error("Pair has empty base or quote: {0}")]
    EmptyPart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_parse() {
        let pair: Pair = "btc_usd".parse().unwrap();
        assert_eq!(pair.as_str(), "btc_usd");
        assert_eq!(pair.base(), Some("btc"));
        assert_eq!(pair.quote(), Some("usd"));
    }

    #[test]
    fn test_pair_parse_lowercases() {
        let pair: Pair = "LTC_BTC".parse().unwrap();
        assert_eq!(pair.as_str(), Pair::LTC_BTC);
    }

    #[test]
    fn test_pair_parse_error() {
        assert_eq!(
            "btcusd".parse::<Pair>(),
            Err(PairParseError::MissingSeparator("btcusd".into()))
        );
        assert!(matches!("_usd".parse::<Pair>(), Err(PairParseError::EmptyPart(_))));
        assert!(matches!("btc_".parse::<Pair>(), Err(PairParseError::EmptyPart(_))));
        assert!(matches!("btc_us/d".parse::<Pair>(), Err(PairParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_pair_serde() {
        let pair = Pair::new(Pair::NMC_BTC);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"nmc_btc\"");

        let parsed: Pair = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pair);
    }
}
