//! REST API client for the BTC-e cryptocurrency exchange
//!
//! This crate provides an async client for BTC-e's public market data API
//! (`/api/2`) and its authenticated trading API (`/tapi`).
//!
//! # Features
//!
//! - **Market Data**: Ticker, recent trades, orderbook depth, fees
//! - **Account**: Balances and rights, transaction history, trade history, open orders
//! - **Trading**: Place and cancel limit orders
//!
//! # Authentication
//!
//! Private calls are form-encoded POSTs signed with HMAC-SHA512 over the
//! exact request body. Each call consumes one nonce from a strictly
//! increasing counter shared by all clones of a client.
//!
//! # Example
//!
//! ```no_run
//! use btce_rest::{BtceClient, Credentials, HistoryQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BtceClient::new()?;
//!     let depth = client.get_depth("btc_usd").await?;
//!     println!("spread: {:?}", depth.spread());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BtceClient::with_credentials(creds)?;
//!     let info = auth_client.get_info().await?;
//!     println!("funds: {:?}", info.funds.non_zero());
//!
//!     let recent = auth_client
//!         .trans_history(Some(&HistoryQuery::new().with_count(10)))
//!         .await?;
//!     println!("{} transactions", recent.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Every request goes through an [`HttpTransport`]. Enable the `test-utils`
//! feature for `MockTransport`, or pass your own transport to
//! [`BtceClient::with_transport`].

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use btce_auth::{CounterNonce, Credentials, NonceSource};
pub use client::{BtceClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{RestError, RestResult};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;

// Re-export endpoint-specific types
pub use types::{
    // Requests
    ActiveOrdersQuery, HistoryQuery, OrderId, TradeHistoryQuery, TradeRequest,
    // Account
    AccountInfo, ActiveOrder, Funds, Rights, TradeRecord, Transaction,
    // Trading
    CancelledOrder, PlacedOrder,
    // Market data
    Depth, Fee, PublicTrade, Ticker,
};
pub use btce_types::{DepthLevel, Pair, SortOrder, TradeType};
