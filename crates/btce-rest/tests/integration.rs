//! Integration tests against a local HTTP server
//!
//! These go through the real `reqwest` transport.

mod common;

use btce_auth::Params;
use btce_rest::{BtceClient, ClientConfig, HistoryQuery, RestError, SortOrder, TradeRequest, TransportError};
use common::*;
use rust_decimal_macros::dec;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn expected_sign(body: &str) -> String {
    let params: Params = body
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect();
    btce_auth::sign(API_SECRET.as_bytes(), API_KEY, &params).sign
}

#[tokio::test]
async fn test_get_info_signed_request() {
    let server = setup_mock_server().await;
    let body = format!("method=getInfo&nonce={FIRST_NONCE}");

    Mock::given(method("POST"))
        .and(path("/tapi"))
        .and(header("Key", API_KEY))
        .and(header("Sign", expected_sign(&body).as_str()))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_string(GET_INFO))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let info = client.get_info().await.unwrap();

    assert_eq!(info.funds.get("usd"), dec!(325));
    assert_eq!(info.funds.get("BTC"), dec!(23.998));
    assert_eq!(info.funds.get("nmc"), dec!(0.5));
    assert_eq!(info.funds.get("doge"), dec!(0));
    assert!(info.rights.info && info.rights.trade && !info.rights.withdraw);
    assert_eq!(info.transaction_count, 80);
    assert_eq!(info.open_orders, 1);
    assert_eq!(client.last_nonce(), FIRST_NONCE);
}

#[tokio::test]
async fn test_trans_history_flattened_in_id_order() {
    let server = setup_mock_server().await;
    let body = format!("count=2&method=TransHistory&nonce={FIRST_NONCE}&order=ASC");

    Mock::given(method("POST"))
        .and(path("/tapi"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200).set_body_string(TRANS_HISTORY))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let query = HistoryQuery::new().with_count(2).with_order(SortOrder::Asc);
    let history = client.trans_history(Some(&query)).await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, 1000);
    assert_eq!(history[0].amount, dec!(0.25));
    assert_eq!(history[1].id, 1081672);
    assert_eq!(history[1].description, "BTC Payment");
}

#[tokio::test]
async fn test_active_orders_and_empty_result() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ACTIVE_ORDERS))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NO_ORDERS))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let orders = client.active_orders(None).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, 343152);
    assert_eq!(orders[0].pair.as_str(), "btc_usd");

    let err = client.active_orders(None).await.unwrap_err();
    assert_eq!(err.api_message(), Some("no orders"));
    assert_eq!(client.last_nonce(), FIRST_NONCE + 1);
}

#[tokio::test]
async fn test_trade_body_is_encoded() {
    let server = setup_mock_server().await;
    let body = format!("amount=0.5&method=Trade&nonce={FIRST_NONCE}&pair=ltc_btc&rate=0.0251&type=sell");

    Mock::given(method("POST"))
        .and(path("/tapi"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success":1,"return":{"received":0.5,"remains":0,"order_id":0,"funds":{"ltc":9.5,"btc":"0.01255"}}}"#,
        ))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let placed = client
        .trade(&TradeRequest::sell("ltc_btc", dec!(0.02510), dec!(0.5)))
        .await
        .unwrap();

    assert!(placed.is_filled());
    assert_eq!(placed.funds.get("btc"), dec!(0.01255));
}

#[tokio::test]
async fn test_non_ok_status_is_reported() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(ResponseTemplate::new(502).set_body_string(r#"{"error":"bad gateway"}"#))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let err = client.get_info().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.api_message(), Some("bad gateway"));
}

#[tokio::test]
async fn test_public_ticker() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/2/btc_usd/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TICKER))
        .mount(&server)
        .await;

    let ticker = public_client(&server).get_ticker("btc_usd").await.unwrap();
    assert_eq!(ticker.last, dec!(101.773));
    assert_eq!(ticker.vol_cur, dec!(16541.51969));
    assert_eq!(ticker.updated, 1370816308);
}

#[tokio::test]
async fn test_public_depth_and_trades() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/2/btc_usd/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DEPTH))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/2/btc_usd/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TRADES))
        .mount(&server)
        .await;

    let client = public_client(&server);

    let depth = client.get_depth("btc_usd").await.unwrap();
    assert_eq!(depth.asks.len(), 3);
    assert_eq!(depth.asks[1].amount, dec!(15));
    assert_eq!(depth.best_bid(), Some(dec!(103.2)));
    assert_eq!(depth.spread(), Some(dec!(0.226)));

    let trades = client.get_trades("btc_usd").await.unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].tid, 7012318);
    assert_eq!(trades[1].price, dec!(101.9));
}

#[tokio::test]
async fn test_public_error_body() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/2/xxx_yyy/fee"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error":"invalid pair"}"#))
        .mount(&server)
        .await;

    let err = public_client(&server).get_fee("xxx_yyy").await.unwrap_err();
    assert!(matches!(err, RestError::Api { ref message } if message == "invalid pair"));
}

#[tokio::test]
async fn test_private_call_without_credentials() {
    let server = setup_mock_server().await;
    let err = public_client(&server).get_info().await.unwrap_err();
    assert!(matches!(err, RestError::AuthRequired));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_configured_timeout_surfaces_as_transport_error() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/2/btc_usd/fee"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"trade":0.2}"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new().with_base_url(server.uri()).with_timeout(1);
    let client = BtceClient::with_config(config).unwrap();

    let err = client.get_fee("btc_usd").await.unwrap_err();
    assert!(
        matches!(err, RestError::Transport(TransportError::Timeout)),
        "unexpected error: {err:?}"
    );
}
