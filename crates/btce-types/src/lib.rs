//! Shared types for the BTC-e REST API
//!
//! This crate provides the core type definitions used by the signing and
//! REST crates. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Pair`] - Trading pair identifiers (e.g., "btc_usd")
//! - [`DepthLevel`] - Positional `[price, amount]` orderbook level
//! - [`SortOrder`], [`TradeType`], [`BookSide`] - Wire enums
//! - [`serde_util`] - Decimal and `0`/`1` flag decoding helpers

pub mod enums;
pub mod level;
pub mod pair;
pub mod serde_util;

pub use enums::*;
pub use level::*;
pub use pair::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
