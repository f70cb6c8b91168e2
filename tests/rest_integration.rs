use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yobit_api_client::error::YobitError;
use yobit_api_client::rest::public::{DepthRequest, TradesRequest};
use yobit_api_client::rest::YobitRestClient;
use yobit_api_client::types::TradeSide;

fn build_client(server: &MockServer) -> YobitRestClient {
    YobitRestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_get_info() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "server_time": 1_700_000_000,
        "pairs": {
            "ltc_btc": {
                "decimal_places": 8,
                "min_price": 0.00000001,
                "max_price": 10000,
                "min_amount": 0.0001,
                "hidden": 0,
                "fee": 0.2
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_info().await.unwrap();
    assert_eq!(info.server_time, 1_700_000_000);
    assert_eq!(info.pairs["ltc_btc"].decimal_places, 8);
    assert!(!info.pairs["ltc_btc"].is_hidden());
}

#[tokio::test]
async fn test_get_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "ltc_btc": {
            "high": 0.0071,
            "low": 0.0064,
            "avg": 0.00675,
            "vol": 12.5,
            "vol_cur": 1850.0,
            "last": 0.00681,
            "buy": 0.0068,
            "sell": 0.00682,
            "updated": 1_700_000_000
        }
    });

    Mock::given(method("GET"))
        .and(path("/ticker/ltc_btc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker = client.get_ticker("ltc_btc").await.unwrap();
    assert_eq!(ticker["ltc_btc"].last, 0.00681);
    assert_eq!(ticker["ltc_btc"].updated, 1_700_000_000);
}

#[tokio::test]
async fn test_get_depth_with_limit() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "ltc_btc": {
            "asks": [[0.0069, 2.5], [0.0070, 1.0]],
            "bids": [[0.0068, 4.0]]
        }
    });

    Mock::given(method("GET"))
        .and(path("/depth/ltc_btc"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = DepthRequest::new("ltc_btc").limit(2);
    let books = client.get_depth(&request).await.unwrap();
    let book = &books["ltc_btc"];
    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.best_ask().unwrap().price, 0.0069);
    assert_eq!(book.best_bid().unwrap().volume, 4.0);
}

#[tokio::test]
async fn test_get_trades() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "ltc_btc": [
            {"type": "bid", "price": 0.0069, "amount": 0.5, "tid": 2, "timestamp": 1_700_000_002},
            {"type": "ask", "price": 0.0068, "amount": 1.5, "tid": 1, "timestamp": 1_700_000_001}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/trades/ltc_btc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client
        .get_trades(&TradesRequest::new("ltc_btc"))
        .await
        .unwrap();
    let entries = &trades["ltc_btc"];
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].side, Some(TradeSide::Bid));
    assert_eq!(entries[1].tid, Some(1));
}

#[tokio::test]
async fn test_non_200_maps_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ticker/ltc_btc"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticker("ltc_btc").await.unwrap_err();
    match err {
        YobitError::HttpStatus { status } => assert_eq!(status, 503),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_payload() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": 0,
        "error": "Invalid pair name: abc_def"
    });

    Mock::given(method("GET"))
        .and(path("/ticker/abc_def"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticker("abc_def").await.unwrap_err();
    match err {
        YobitError::Api(api_error) => assert!(api_error.is_invalid_pair()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_info().await.unwrap_err();
    assert!(matches!(err, YobitError::InvalidResponse(_)));
}
