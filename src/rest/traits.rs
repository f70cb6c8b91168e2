//! Trait definition for sources of Yobit public market data.
//!
//! [`MarketDataSource`] is the seam between [`MarketClient`](crate::market::MarketClient)
//! and the network: it fetches one endpoint and returns the decoded body.
//! [`YobitRestClient`](crate::rest::YobitRestClient) implements it over HTTP,
//! tests implement it over fixed data.
//!
//! # Example
//!
//! ```rust,ignore
//! use yobit_api_client::rest::MarketDataSource;
//!
//! async fn listed<S: MarketDataSource>(source: &S) -> Result<usize, yobit_api_client::YobitError> {
//!     Ok(source.get_info().await?.pairs.len())
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;

use crate::error::YobitError;
use crate::rest::public::{DepthRequest, ExchangeInfo, OrderBook, Ticker, Trade, TradesRequest};

/// Trait defining the public Yobit REST operations.
///
/// A non-200 answer must be reported as [`YobitError::HttpStatus`] so callers
/// can apply their failure policy to it.
pub trait MarketDataSource: Send + Sync {
    /// Get exchange-wide pair metadata.
    fn get_info(&self) -> impl Future<Output = Result<ExchangeInfo, YobitError>> + Send;

    /// Get ticker information for one or more hyphen-separated pairs.
    fn get_ticker(
        &self,
        pairs: &str,
    ) -> impl Future<Output = Result<HashMap<String, Ticker>, YobitError>> + Send;

    /// Get the order book.
    fn get_depth(
        &self,
        request: &DepthRequest,
    ) -> impl Future<Output = Result<HashMap<String, OrderBook>, YobitError>> + Send;

    /// Get recent trades, newest first.
    fn get_trades(
        &self,
        request: &TradesRequest,
    ) -> impl Future<Output = Result<HashMap<String, Vec<Trade>>, YobitError>> + Send;
}
