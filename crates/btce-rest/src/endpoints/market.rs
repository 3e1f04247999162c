//! Public market data endpoints
//!
//! These endpoints don't require authentication. Responses are decoded
//! directly, without the private envelope.

use btce_auth::percent_encode;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, instrument};

use crate::envelope::decode_public;
use crate::error::RestResult;
use crate::transport::{HttpRequest, HttpTransport};
use crate::types::{Depth, Fee, PublicTrade, Ticker, TickerResponse};

/// Actions available under `/api/2/{pair}/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicAction {
    /// Price and volume snapshot
    Ticker,
    /// Recent trades
    Trades,
    /// Orderbook
    Depth,
    /// Trading fee
    Fee,
}

impl PublicAction {
    /// Path segment for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticker => "ticker",
            Self::Trades => "trades",
            Self::Depth => "depth",
            Self::Fee => "fee",
        }
    }
}

impl fmt::Display for PublicAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a dyn HttpTransport,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(transport: &'a dyn HttpTransport, base_url: &'a str) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// URL for a public action on a pair
    pub fn url(&self, pair: &str, action: PublicAction) -> String {
        format!("{}/api/2/{}/{}", self.base_url, percent_encode(pair), action)
    }

    async fn query<T: DeserializeOwned>(&self, pair: &str, action: PublicAction) -> RestResult<T> {
        let url = self.url(pair, action);
        debug!(%url, "Fetching public data");

        let response = self.transport.send(HttpRequest::get(url)).await?;
        decode_public(&response)
    }

    /// Get the ticker for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "btc_usd")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, pair: &str) -> RestResult<Ticker> {
        let response: TickerResponse = self.query(pair, PublicAction::Ticker).await?;
        Ok(response.ticker)
    }

    /// Get recent public trades for a pair
    #[instrument(skip(self))]
    pub async fn get_trades(&self, pair: &str) -> RestResult<Vec<PublicTrade>> {
        self.query(pair, PublicAction::Trades).await
    }

    /// Get the orderbook for a pair
    #[instrument(skip(self))]
    pub async fn get_depth(&self, pair: &str) -> RestResult<Depth> {
        self.query(pair, PublicAction::Depth).await
    }

    /// Get the trading fee for a pair
    #[instrument(skip(self))]
    pub async fn get_fee(&self, pair: &str) -> RestResult<Fee> {
        self.query(pair, PublicAction::Fee).await
    }
}
