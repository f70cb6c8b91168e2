//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use std::collections::HashMap;

use crate::error::YobitError;
use crate::rest::YobitRestClient;
use crate::rest::endpoints::public;

impl YobitRestClient {
    /// Get exchange-wide pair metadata.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yobit_api_client::rest::YobitRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = YobitRestClient::new();
    ///     let info = client.get_info().await?;
    ///     println!("{} pairs listed", info.pairs.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_info(&self) -> Result<ExchangeInfo, YobitError> {
        self.public_get(public::INFO).await
    }

    /// Get ticker information for one or more pairs.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Hyphen-separated list of pairs (e.g., "ltc_btc-doge_btc").
    pub async fn get_ticker(&self, pairs: &str) -> Result<HashMap<String, Ticker>, YobitError> {
        self.public_get(&format!("{}/{}", public::TICKER, pairs))
            .await
    }

    /// Get the order book for one or more pairs.
    ///
    /// # Arguments
    ///
    /// * `request` - Depth request parameters.
    pub async fn get_depth(
        &self,
        request: &DepthRequest,
    ) -> Result<HashMap<String, OrderBook>, YobitError> {
        let endpoint = format!("{}/{}", public::DEPTH, request.pair);
        self.public_get_with_params(&endpoint, request).await
    }

    /// Get recent trades for one or more pairs, newest first.
    ///
    /// # Arguments
    ///
    /// * `request` - Recent trades request parameters.
    pub async fn get_trades(
        &self,
        request: &TradesRequest,
    ) -> Result<HashMap<String, Vec<Trade>>, YobitError> {
        let endpoint = format!("{}/{}", public::TRADES, request.pair);
        self.public_get_with_params(&endpoint, request).await
    }
}
