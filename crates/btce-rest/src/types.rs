//! Types for BTC-e REST API requests and responses

use btce_auth::Params;
use btce_types::serde_util::{deserialize_decimal, deserialize_decimal_map, deserialize_flag};
use btce_types::{BookSide, DepthLevel, Pair, SortOrder, TradeType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::envelope::Keyed;

/// Exchange-assigned order identifier
pub type OrderId = u64;

fn unix_time(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

// ============================================================================
// Request Options
// ============================================================================

/// Flattening of a typed options record into request parameters
///
/// Only fields that are set are written; an explicit zero is still sent.
pub trait ToParams {
    /// Write every set field into `params`
    fn write_params(&self, params: &mut Params);
}

impl ToParams for () {
    fn write_params(&self, _params: &mut Params) {}
}

impl<T: ToParams> ToParams for Option<T> {
    fn write_params(&self, params: &mut Params) {
        if let Some(options) = self {
            options.write_params(params);
        }
    }
}

impl<T: ToParams> ToParams for &T {
    fn write_params(&self, params: &mut Params) {
        (*self).write_params(params);
    }
}

/// Paging and range options shared by the history endpoints
///
/// Every field defaults to "let the server decide".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Number of records to skip (server default: 0)
    pub from: Option<u64>,
    /// Number of records to return (server default: 1000)
    pub count: Option<u64>,
    /// Id of the first record to return (server default: 0)
    pub from_id: Option<u64>,
    /// Id of the last record to return (server default: ∞)
    pub end_id: Option<u64>,
    /// Sorting (server default: DESC)
    pub order: Option<SortOrder>,
    /// Unix time to start from (server default: 0)
    pub since: Option<u64>,
    /// Unix time to stop at (server default: ∞)
    pub end: Option<u64>,
}

impl HistoryQuery {
    /// Create an empty query (all server defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip this many records
    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// Limit the number of records
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Start at this record id
    pub fn with_from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }

    /// Stop at this record id
    pub fn with_end_id(mut self, end_id: u64) -> Self {
        self.end_id = Some(end_id);
        self
    }

    /// Set the sort order
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Only records at or after this Unix time
    pub fn with_since(mut self, since: u64) -> Self {
        self.since = Some(since);
        self
    }

    /// Only records at or before this Unix time
    pub fn with_end(mut self, end: u64) -> Self {
        self.end = Some(end);
        self
    }
}

impl ToParams for HistoryQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("from", self.from);
        params.insert_opt("count", self.count);
        params.insert_opt("from_id", self.from_id);
        params.insert_opt("end_id", self.end_id);
        params.insert_opt("order", self.order);
        params.insert_opt("since", self.since);
        params.insert_opt("end", self.end);
    }
}

/// Options for `TradeHistory`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeHistoryQuery {
    /// Paging and range options
    pub range: HistoryQuery,
    /// Only trades on this pair (server default: all pairs)
    pub pair: Option<Pair>,
}

impl TradeHistoryQuery {
    /// Create an empty query (all server defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one pair
    pub fn with_pair(mut self, pair: impl Into<Pair>) -> Self {
        self.pair = Some(pair.into());
        self
    }

    /// Set paging and range options
    pub fn with_range(mut self, range: HistoryQuery) -> Self {
        self.range = range;
        self
    }
}

impl ToParams for TradeHistoryQuery {
    fn write_params(&self, params: &mut Params) {
        self.range.write_params(params);
        params.insert_opt("pair", self.pair.as_ref());
    }
}

/// Options for `ActiveOrders`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveOrdersQuery {
    /// Only orders on this pair (server default: all pairs)
    pub pair: Option<Pair>,
}

impl ActiveOrdersQuery {
    /// Orders on one pair
    pub fn for_pair(pair: impl Into<Pair>) -> Self {
        Self {
            pair: Some(pair.into()),
        }
    }
}

impl ToParams for ActiveOrdersQuery {
    fn write_params(&self, params: &mut Params) {
        params.insert_opt("pair", self.pair.as_ref());
    }
}

/// Request to place an order (`Trade`); every field is required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    /// Trading pair
    pub pair: Pair,
    /// Buy or sell
    pub trade_type: TradeType,
    /// Price to buy/sell at
    pub rate: Decimal,
    /// Amount to buy/sell
    pub amount: Decimal,
}

impl TradeRequest {
    /// Create an order request
    pub fn new(pair: impl Into<Pair>, trade_type: TradeType, rate: Decimal, amount: Decimal) -> Self {
        Self {
            pair: pair.into(),
            trade_type,
            rate,
            amount,
        }
    }

    /// Create a buy order
    pub fn buy(pair: impl Into<Pair>, rate: Decimal, amount: Decimal) -> Self {
        Self::new(pair, TradeType::Buy, rate, amount)
    }

    /// Create a sell order
    pub fn sell(pair: impl Into<Pair>, rate: Decimal, amount: Decimal) -> Self {
        Self::new(pair, TradeType::Sell, rate, amount)
    }

    /// Quote-currency value of the order (rate × amount)
    pub fn total(&self) -> Decimal {
        self.rate * self.amount
    }
}

impl ToParams for TradeRequest {
    fn write_params(&self, params: &mut Params) {
        params.insert("pair", &self.pair);
        params.insert("type", self.trade_type);
        params.insert("rate", self.rate.normalize());
        params.insert("amount", self.amount.normalize());
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Balances by currency code (e.g. "usd", "btc")
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Funds(#[serde(deserialize_with = "deserialize_decimal_map")] pub BTreeMap<String, Decimal>);

impl Funds {
    /// Get balance for a currency (zero if absent)
    pub fn get(&self, currency: &str) -> Decimal {
        self.0
            .get(&currency.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Get all non-zero balances
    pub fn non_zero(&self) -> BTreeMap<&str, Decimal> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_zero())
            .map(|(k, v)| (k.as_str(), *v))
            .collect()
    }

    /// Iterate over all balances
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// API key privileges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Rights {
    /// Key may read account info
    #[serde(deserialize_with = "deserialize_flag")]
    pub info: bool,
    /// Key may trade
    #[serde(deserialize_with = "deserialize_flag")]
    pub trade: bool,
    /// Key may withdraw
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub withdraw: bool,
}

/// Result of `getInfo`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountInfo {
    /// Current balances
    pub funds: Funds,
    /// API key privileges
    pub rights: Rights,
    /// Number of transactions on the account
    pub transaction_count: u64,
    /// Number of open orders
    pub open_orders: u64,
    /// Server Unix time
    pub server_time: i64,
}

impl AccountInfo {
    /// Server time as a UTC timestamp
    pub fn server_time_utc(&self) -> Option<DateTime<Utc>> {
        unix_time(self.server_time)
    }
}

/// One entry of `TransHistory`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    /// Transaction id (the mapping key)
    #[serde(skip)]
    pub id: u64,
    /// Transaction type code
    #[serde(rename = "type")]
    pub kind: i64,
    /// Amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// Currency code
    pub currency: String,
    /// Human readable description
    #[serde(rename = "desc")]
    pub description: String,
    /// Status code
    pub status: i64,
    /// Unix time of the transaction
    pub timestamp: i64,
}

impl Transaction {
    /// Transaction time as a UTC timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.timestamp)
    }
}

impl Keyed for Transaction {
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// One entry of `TradeHistory`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TradeRecord {
    /// Trade id (the mapping key)
    #[serde(skip)]
    pub id: u64,
    /// Trading pair
    pub pair: Pair,
    /// Buy or sell
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Traded amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// Execution price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub rate: Decimal,
    /// Order the trade belongs to
    pub order_id: OrderId,
    /// Whether the account's order was the maker
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_your_order: bool,
    /// Unix time of the trade
    pub timestamp: i64,
}

impl TradeRecord {
    /// Trade time as a UTC timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.timestamp)
    }
}

impl Keyed for TradeRecord {
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// One entry of `ActiveOrders`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActiveOrder {
    /// Order id (the mapping key)
    #[serde(skip)]
    pub id: OrderId,
    /// Trading pair
    pub pair: Pair,
    /// Buy or sell
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Remaining amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// Order price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub rate: Decimal,
    /// Status code
    pub status: i64,
    /// Unix time the order was created
    pub timestamp_created: i64,
}

impl ActiveOrder {
    /// Creation time as a UTC timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.timestamp_created)
    }
}

impl Keyed for ActiveOrder {
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Result of `Trade`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlacedOrder {
    /// Amount filled immediately
    #[serde(deserialize_with = "deserialize_decimal")]
    pub received: Decimal,
    /// Amount left on the book
    #[serde(deserialize_with = "deserialize_decimal")]
    pub remains: Decimal,
    /// Id of the resting order (0 when fully filled)
    pub order_id: OrderId,
    /// Balances after the trade
    pub funds: Funds,
}

impl PlacedOrder {
    /// Whether the order filled completely and left nothing on the book
    pub fn is_filled(&self) -> bool {
        self.order_id == 0 || self.remains.is_zero()
    }
}

/// Result of `CancelOrder`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CancelledOrder {
    /// Id of the cancelled order
    pub order_id: OrderId,
    /// Balances after cancellation
    pub funds: Funds,
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker snapshot for a pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticker {
    /// 24h high
    #[serde(deserialize_with = "deserialize_decimal")]
    pub high: Decimal,
    /// 24h low
    #[serde(deserialize_with = "deserialize_decimal")]
    pub low: Decimal,
    /// 24h average price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub avg: Decimal,
    /// 24h volume in quote currency
    #[serde(deserialize_with = "deserialize_decimal")]
    pub vol: Decimal,
    /// 24h volume in base currency
    #[serde(deserialize_with = "deserialize_decimal")]
    pub vol_cur: Decimal,
    /// Last trade price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub last: Decimal,
    /// Best buy price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub buy: Decimal,
    /// Best sell price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub sell: Decimal,
    /// Unix time of the last update
    pub updated: i64,
    /// Server Unix time
    pub server_time: i64,
}

impl Ticker {
    /// Spread between best sell and best buy
    pub fn spread(&self) -> Decimal {
        self.sell - self.buy
    }

    /// Mid price (average of buy and sell)
    pub fn mid_price(&self) -> Decimal {
        (self.buy + self.sell) / Decimal::TWO
    }

    /// Last update as a UTC timestamp
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.updated)
    }
}

/// Wire shape of the ticker endpoint: `{"ticker": {...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct TickerResponse {
    pub ticker: Ticker,
}

/// A public trade from the `trades` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicTrade {
    /// Unix time of the trade
    pub date: i64,
    /// Execution price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: Decimal,
    /// Traded amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// Trade id
    pub tid: u64,
    /// Quote currency (e.g. "USD")
    pub price_currency: String,
    /// Base currency (e.g. "BTC")
    pub item: String,
    /// Side of the book the trade executed against
    pub trade_type: BookSide,
}

impl PublicTrade {
    /// Trade time as a UTC timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date)
    }
}

/// Orderbook snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Depth {
    /// Ask levels, best first
    #[serde(default)]
    pub asks: Vec<DepthLevel>,
    /// Bid levels, best first
    #[serde(default)]
    pub bids: Vec<DepthLevel>,
}

impl Depth {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Trading fee for a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Fee {
    /// Fee in percent (e.g. 0.2 means 0.2%)
    #[serde(deserialize_with = "deserialize_decimal")]
    pub trade: Decimal,
}
