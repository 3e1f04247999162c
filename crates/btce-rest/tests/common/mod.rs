//! Common test utilities and fixtures for integration tests
//!
//! Sample bodies follow the shapes served by the BTC-e API.

#![allow(dead_code)]

use btce_rest::{BtceClient, ClientConfig, CounterNonce, Credentials};
use std::sync::Arc;
use wiremock::MockServer;

pub const API_KEY: &str = "46G9R9D6-WJ77XOIP-XH9HH5VQ-A3XN3YOZ-8T1R8I8T";
pub const API_SECRET: &str = "7a4b9f2c1e8d3a6b5c0f9e2d1a4b7c3e";

/// First nonce issued by clients from [`authed_client`]
pub const FIRST_NONCE: u64 = 1_000_001;

pub const GET_INFO: &str = r#"{
    "success": 1,
    "return": {
        "funds": {"usd": 325.0, "btc": 23.998, "ltc": 0, "nmc": "0.5"},
        "rights": {"info": 1, "trade": 1, "withdraw": 0},
        "transaction_count": 80,
        "open_orders": 1,
        "server_time": 1342123547
    }
}"#;

pub const TRANS_HISTORY: &str = r#"{
    "success": 1,
    "return": {
        "1081672": {"type": 1, "amount": 1.0, "currency": "BTC", "desc": "BTC Payment", "status": 2, "timestamp": 1342448420},
        "1000": {"type": 4, "amount": "0.25", "currency": "USD", "desc": "Sell 0.01 BTC", "status": 2, "timestamp": 1342400000}
    }
}"#;

pub const ACTIVE_ORDERS: &str = r#"{
    "success": 1,
    "return": {
        "343152": {"pair": "btc_usd", "type": "sell", "amount": 1.0, "rate": 3.0, "timestamp_created": 1342448420, "status": 0}
    }
}"#;

pub const NO_ORDERS: &str = r#"{"success": 0, "error": "no orders"}"#;

pub const TICKER: &str = r#"{
    "ticker": {
        "high": 109.88, "low": 91.14, "avg": 100.51, "vol": 1632898.2249,
        "vol_cur": 16541.51969, "last": 101.773, "buy": 101.9, "sell": 101.773,
        "updated": 1370816308, "server_time": 1370816308
    }
}"#;

pub const DEPTH: &str = r#"{
    "asks": [[103.426, 0.01], [103.5, 15], [103.504, 0.425]],
    "bids": [[103.2, 2.48502251], [103.082, 0.46540304]]
}"#;

pub const TRADES: &str = r#"[
    {"date": 1370816273, "price": 101.773, "amount": 0.0100027, "tid": 7012318, "price_currency": "USD", "item": "BTC", "trade_type": "bid"},
    {"date": 1370816271, "price": 101.9, "amount": 0.5, "tid": 7012317, "price_currency": "USD", "item": "BTC", "trade_type": "ask"}
]"#;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Unauthenticated client pointed at the mock server
pub fn public_client(server: &MockServer) -> BtceClient {
    BtceClient::with_config(ClientConfig::new().with_base_url(server.uri()))
        .expect("client builds")
}

/// Authenticated client with a deterministic nonce counter
pub fn authed_client(server: &MockServer) -> BtceClient {
    let creds = Credentials::new(API_KEY, API_SECRET).expect("valid credentials");
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_credentials(creds)
        .with_timeout(5);
    BtceClient::with_config(config)
        .expect("client builds")
        .with_nonce_source(Arc::new(CounterNonce::starting_at(FIRST_NONCE - 1)))
}
