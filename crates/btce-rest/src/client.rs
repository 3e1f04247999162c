//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, PrivateApi, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{
    AccountInfo, ActiveOrder, ActiveOrdersQuery, CancelledOrder, Depth, Fee, HistoryQuery,
    OrderId, PlacedOrder, PublicTrade, Ticker, TradeHistoryQuery, TradeRecord, TradeRequest,
    Transaction,
};
use btce_auth::{CounterNonce, Credentials, NonceSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://btc-e.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("btce-rest/", env!("CARGO_PKG_VERSION"));

/// BTC-e REST API client
///
/// Provides access to both public and private endpoints. Clones share the
/// transport and the nonce counter, so they can be used concurrently against
/// the same API key.
///
/// # Example
///
/// ```no_run
/// use btce_rest::{BtceClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BtceClient::new()?;
///     let ticker = client.get_ticker("btc_usd").await?;
///     println!("last: {}", ticker.last);
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BtceClient::with_credentials(creds)?;
///     let info = auth_client.get_info().await?;
///     println!("usd: {}", info.funds.get("usd"));
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BtceClient {
    transport: Arc<dyn HttpTransport>,
    credentials: Option<Credentials>,
    nonces: Arc<dyn NonceSource>,
    base_url: String,
    tapi_url: String,
}

impl BtceClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a caller-supplied transport
    ///
    /// `timeout_secs` and `user_agent` from the config are ignored; they
    /// only apply to the built-in transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let tapi_url = format!("{base_url}/tapi");

        info!(
            base_url = %base_url,
            authenticated = config.credentials.is_some(),
            "Created BTC-e REST client"
        );

        Self {
            transport,
            credentials: config.credentials,
            nonces: Arc::new(CounterNonce::from_clock()),
            base_url,
            tapi_url,
        }
    }

    /// Replace the nonce source
    ///
    /// Use this to share one counter between several clients with the same
    /// key, or to resume from a persisted value.
    pub fn with_nonce_source(mut self, nonces: Arc<dyn NonceSource>) -> Self {
        self.nonces = nonces;
        self
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The most recently issued nonce
    pub fn last_nonce(&self) -> u64 {
        self.nonces.last_nonce()
    }

    /// API host this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn private_api(&self) -> RestResult<PrivateApi<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(PrivateApi::new(
            self.transport.as_ref(),
            creds,
            self.nonces.as_ref(),
            &self.tapi_url,
        ))
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self.transport.as_ref(), &self.base_url)
    }

    /// Get the ticker for a trading pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "btc_usd", "ltc_btc")
    pub async fn get_ticker(&self, pair: &str) -> RestResult<Ticker> {
        self.market().get_ticker(pair).await
    }

    /// Get recent public trades for a pair
    pub async fn get_trades(&self, pair: &str) -> RestResult<Vec<PublicTrade>> {
        self.market().get_trades(pair).await
    }

    /// Get the orderbook for a pair
    pub async fn get_depth(&self, pair: &str) -> RestResult<Depth> {
        self.market().get_depth(pair).await
    }

    /// Get the trading fee for a pair
    pub async fn get_fee(&self, pair: &str) -> RestResult<Fee> {
        self.market().get_fee(pair).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        Ok(AccountEndpoints::new(self.private_api()?))
    }

    /// Get balances and key rights
    pub async fn get_info(&self) -> RestResult<AccountInfo> {
        self.account()?.get_info().await
    }

    /// Get the transaction history
    pub async fn trans_history(&self, options: Option<&HistoryQuery>) -> RestResult<Vec<Transaction>> {
        self.account()?.trans_history(options).await
    }

    /// Get the trade history
    pub async fn trade_history(
        &self,
        options: Option<&TradeHistoryQuery>,
    ) -> RestResult<Vec<TradeRecord>> {
        self.account()?.trade_history(options).await
    }

    /// Get open orders
    pub async fn active_orders(
        &self,
        options: Option<&ActiveOrdersQuery>,
    ) -> RestResult<Vec<ActiveOrder>> {
        self.account()?.active_orders(options).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        Ok(TradingEndpoints::new(self.private_api()?))
    }

    /// Place a limit order
    pub async fn trade(&self, order: &TradeRequest) -> RestResult<PlacedOrder> {
        self.trading()?.trade(order).await
    }

    /// Cancel an open order
    pub async fn cancel_order(&self, order_id: OrderId) -> RestResult<CancelledOrder> {
        self.trading()?.cancel_order(order_id).await
    }
}

impl std::fmt::Debug for BtceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BtceClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .field("last_nonce", &self.last_nonce())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API host, without a trailing path
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API host (e.g. a mirror or a local test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
