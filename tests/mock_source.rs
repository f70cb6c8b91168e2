use std::collections::HashMap;
use std::sync::Mutex;

use yobit_api_client::error::YobitError;
use yobit_api_client::market::MarketClient;
use yobit_api_client::rest::MarketDataSource;
use yobit_api_client::rest::public::{
    DepthRequest, ExchangeInfo, OrderBook, OrderBookLevel, Ticker, Trade, TradesRequest,
};

/// Serves a fixed order book and records which pairs were requested.
#[derive(Default)]
struct FixedBook {
    asks: Vec<OrderBookLevel>,
    bids: Vec<OrderBookLevel>,
    requested: Mutex<Vec<String>>,
}

impl MarketDataSource for FixedBook {
    async fn get_info(&self) -> Result<ExchangeInfo, YobitError> {
        Err(YobitError::HttpStatus { status: 503 })
    }

    async fn get_ticker(&self, _pairs: &str) -> Result<HashMap<String, Ticker>, YobitError> {
        Err(YobitError::HttpStatus { status: 503 })
    }

    async fn get_depth(
        &self,
        request: &DepthRequest,
    ) -> Result<HashMap<String, OrderBook>, YobitError> {
        self.requested.lock().unwrap().push(request.pair.clone());
        let book = OrderBook {
            asks: self.asks.clone(),
            bids: self.bids.clone(),
        };
        Ok(HashMap::from([(request.pair.clone(), book)]))
    }

    async fn get_trades(
        &self,
        _request: &TradesRequest,
    ) -> Result<HashMap<String, Vec<Trade>>, YobitError> {
        Ok(HashMap::new())
    }
}

#[tokio::test]
async fn test_mock_source_drives_market_client() {
    let source = FixedBook {
        asks: vec![OrderBookLevel::new(10.0, 1.0), OrderBookLevel::new(12.0, 2.0)],
        bids: vec![OrderBookLevel::new(9.0, 1.0)],
        ..Default::default()
    };
    let mut client = MarketClient::with_source(source);

    assert_eq!(client.depth_to(12.0).await.unwrap(), Some(34.0));

    client.set_right("usdt");
    assert_eq!(client.depth_to(9.0).await.unwrap(), Some(9.0));

    let requested = client.source().requested.lock().unwrap().clone();
    assert_eq!(requested, vec!["ltc_btc".to_string(), "ltc_usdt".to_string()]);
}

#[tokio::test]
async fn test_mock_source_failures_follow_policy() {
    let client = MarketClient::with_source(FixedBook::default());

    assert_eq!(client.last_price(None).await.unwrap(), None);
    assert!(client.is_available().await.unwrap_err().is_http_failure());
    // Trades answered without the requested pair.
    assert!(client.last_trade().await.unwrap_err().is_data_absent());
}
