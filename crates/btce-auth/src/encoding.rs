//! Parameter encoding for signed requests
//!
//! The exchange verifies signatures against an RFC3986 encoding of the
//! request body: only unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass
//! through, every other byte becomes `%XX` with uppercase hex. This differs
//! from `application/x-www-form-urlencoded`, which writes space as `+`.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Percent-encode a string using the RFC3986 unreserved allow-list
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn percent_encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

/// Request parameters for a private call
///
/// Keys are kept in lexicographic order so the signed payload and the
/// request body are byte-for-byte reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter set with `method` already set
    pub fn with_method(method: &str) -> Self {
        let mut params = Self::new();
        params.insert("method", method);
        params
    }

    /// Set a parameter, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Set a parameter only when a value is present
    pub fn insert_opt<T: fmt::Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether a parameter is set
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `key=value&...` with [`percent_encode`] applied to both sides
    ///
    /// This string is both the signed payload and the POST body.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
