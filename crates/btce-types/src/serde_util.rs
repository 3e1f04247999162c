//! Deserialization helpers for exchange payloads
//!
//! The exchange sends monetary values as bare JSON numbers and boolean flags
//! as `0`/`1`. These helpers map both onto exact Rust types.

use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn number_to_decimal<E: Error>(n: serde_json::Number) -> Result<Decimal, E> {
    use rust_decimal::prelude::FromPrimitive;
    use std::str::FromStr;

    let s = n.to_string();
    // Scientific notation (e.g. 5e-6) is not accepted by from_str
    if s.contains('e') || s.contains('E') {
        let f = n.as_f64().ok_or_else(|| E::custom("invalid number"))?;
        Decimal::from_f64(f).ok_or_else(|| E::custom("cannot convert to decimal"))
    } else {
        Decimal::from_str(&s).map_err(E::custom)
    }
}

/// Deserialize a decimal from either a JSON number or a numeric string
///
/// Numbers go through their textual form so values like `100.5` do not pick
/// up binary floating point noise.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use std::str::FromStr;

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Decimal::from_str(&s).map_err(D::Error::custom),
        StringOrNumber::Number(n) => number_to_decimal(n),
    }
}

/// Deserialize a `{name: number}` object into decimals keyed by name
pub fn deserialize_decimal_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Value(#[serde(deserialize_with = "deserialize_decimal")] Decimal);

    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, Value(v))| (k, v)).collect())
}

/// Deserialize a boolean sent as `0`/`1` (or as a JSON bool)
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "deserialize_decimal")]
        amount: Decimal,
        #[serde(deserialize_with = "deserialize_flag")]
        enabled: bool,
        #[serde(deserialize_with = "deserialize_decimal_map")]
        funds: BTreeMap<String, Decimal>,
    }

    #[test]
    fn test_decimal_from_number_and_string() {
        let json = r#"{"amount": 0.1, "enabled": 1, "funds": {}}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.amount, dec!(0.1));

        let json = r#"{"amount": "88813.5", "enabled": 0, "funds": {}}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.amount, dec!(88813.5));
        assert!(!sample.enabled);
    }

    #[test]
    fn test_flag_accepts_bool() {
        let json = r#"{"amount": 1, "enabled": true, "funds": {}}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();
        assert!(sample.enabled);
    }

    #[test]
    fn test_decimal_map() {
        let json = r#"{"amount": 1, "enabled": 1, "funds": {"usd": 325.5, "btc": 23.998, "ltc": 0}}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.funds.len(), 3);
        assert_eq!(sample.funds["usd"], dec!(325.5));
        assert_eq!(sample.funds["btc"], dec!(23.998));
        assert!(sample.funds["ltc"].is_zero());
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        let json = r#"{"amount": "abc", "enabled": 1, "funds": {}}"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());

        let json = r#"{"amount": null, "enabled": 1, "funds": {}}"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());
    }
}
