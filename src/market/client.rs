//! Pair-scoped market queries on top of a [`MarketDataSource`].

use std::collections::HashMap;

use crate::error::YobitError;
use crate::market::policy::FailurePolicy;
use crate::market::walk::{self, PriceWalk};
use crate::rest::public::{DepthRequest, OrderBook, Trade, TradesRequest};
use crate::rest::{MarketDataSource, YobitRestClient};
use crate::types::{BookSide, Pair};

/// Pair used by [`MarketClient::get_sell_price`] when none is given.
pub const DEFAULT_CONVERSION_PAIR: &str = "doge_btc";

/// Market queries for one trading pair.
///
/// The client holds a base (`left`) and quote (`right`) symbol. Either can be
/// reassigned, which changes the pair used by every later call. Each query
/// fetches fresh data; nothing is cached.
///
/// # Example
///
/// ```rust,no_run
/// use yobit_api_client::market::MarketClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut client = MarketClient::new();
///     client.set_left("doge");
///
///     if client.is_available().await? {
///         let last = client.last_price(None).await?;
///         println!("{}: {:?}", client.pair(), last);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MarketClient<S = YobitRestClient> {
    pair: Pair,
    source: S,
    failure_policy: FailurePolicy,
}

impl MarketClient<YobitRestClient> {
    /// Create a client for `ltc_btc` backed by the live REST API.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> MarketClientBuilder<YobitRestClient> {
        MarketClientBuilder::new()
    }
}

impl Default for MarketClient<YobitRestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MarketDataSource> MarketClient<S> {
    /// Create a client for `ltc_btc` backed by the given source.
    pub fn with_source(source: S) -> Self {
        Self {
            pair: Pair::default(),
            source,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Base currency symbol.
    pub fn left(&self) -> &str {
        &self.pair.left
    }

    /// Replace the base currency symbol.
    pub fn set_left(&mut self, left: impl Into<String>) {
        self.pair.left = left.into();
    }

    /// Quote currency symbol.
    pub fn right(&self) -> &str {
        &self.pair.right
    }

    /// Replace the quote currency symbol.
    pub fn set_right(&mut self, right: impl Into<String>) {
        self.pair.right = right.into();
    }

    /// Wire identifier of the current pair, `left_right`.
    pub fn pair(&self) -> String {
        self.pair.id()
    }

    /// The active failure policy.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Change the failure policy.
    pub fn set_failure_policy(&mut self, policy: FailurePolicy) {
        self.failure_policy = policy;
    }

    /// The underlying data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Check that the current pair is listed on the exchange.
    ///
    /// Fails when the request is not answered with 200, whatever the failure
    /// policy, and when the pair is not listed at all. Hidden pairs count as
    /// available.
    pub async fn is_available(&self) -> Result<bool, YobitError> {
        let pair = self.pair();
        let info = self.source.get_info().await?;
        let pair_info = info
            .pairs
            .get(&pair)
            .ok_or_else(|| YobitError::absent(format!("pair {pair} in exchange info")))?;

        match pair_info.hidden {
            0 => {
                tracing::info!("Current pair {pair} exists...");
                Ok(true)
            }
            1 => {
                tracing::info!("Current pair {pair} exists, but hidden...");
                Ok(true)
            }
            // The exchange only reports 0 or 1.
            _ => Ok(false),
        }
    }

    /// Last trade price of the current pair, or of `pair` when given.
    pub async fn last_price(&self, pair: Option<&str>) -> Result<Option<f64>, YobitError> {
        let current_pair = pair.map_or_else(|| self.pair(), str::to_string);
        let Some(tickers) = self.recover(self.source.get_ticker(&current_pair).await)? else {
            return Ok(None);
        };
        let ticker = take_pair(tickers, &current_pair)?;

        tracing::info!("Price: {current_pair} = {:.8}", ticker.last);
        Ok(Some(ticker.last))
    }

    /// Quote-currency volume that sits between the top of the book and `value`.
    ///
    /// Above the best ask this is the sell-order volume a buyer would consume
    /// to lift the price to `value`; otherwise it is the buy-order volume down
    /// to `value`.
    pub async fn depth_to(&self, value: f64) -> Result<Option<f64>, YobitError> {
        let Some(book) = self.order_book().await? else {
            return Ok(None);
        };
        let (side, depth) = walk::depth_to(&book, value)?;

        let orders = match side {
            BookSide::Asks => "sell",
            BookSide::Bids => "buy ",
        };
        tracing::info!(
            "Orderbook: amount {:.4} {} in {} orders to {:.8} {}",
            depth,
            self.right(),
            orders,
            value,
            self.left()
        );
        Ok(Some(depth))
    }

    /// The most recent trade of the current pair.
    pub async fn last_trade(&self) -> Result<Option<Trade>, YobitError> {
        let Some(trades) = self.trades().await? else {
            return Ok(None);
        };
        let trade = trades
            .into_iter()
            .next()
            .ok_or_else(|| YobitError::absent(format!("trades for {}", self.pair())))?;

        tracing::info!("Amount of last trade: {}", trade.amount);
        Ok(Some(trade))
    }

    /// The `count` most recent trades, newest first.
    ///
    /// Fails if the exchange returned fewer than `count` trades.
    pub async fn last_trades(&self, count: usize) -> Result<Vec<Trade>, YobitError> {
        let Some(mut trades) = self.trades().await? else {
            return Ok(Vec::new());
        };
        if count > trades.len() {
            return Err(YobitError::NotEnoughTrades {
                requested: count,
                available: trades.len(),
            });
        }
        trades.truncate(count);

        tracing::info!("Last {count} trades:");
        for (i, trade) in trades.iter().enumerate() {
            tracing::info!("Amount of {} trade: {}", i + 1, trade.amount);
        }
        Ok(trades)
    }

    /// Ask price to place a buy at so that spending `value` quote currency fills.
    ///
    /// See [`walk::buy_walk`] for how the level is chosen.
    pub async fn buy_price_by_amount(&self, value: f64) -> Result<Option<f64>, YobitError> {
        let Some(book) = self.order_book().await? else {
            return Ok(None);
        };
        let PriceWalk { index, .. } = walk::buy_walk(&book.asks, value);
        let price = walk::price_at(&book, BookSide::Asks, index)?;

        tracing::info!(
            "Buy price for spend {} {} will be: {:.8}",
            value,
            self.right(),
            price
        );
        Ok(Some(price))
    }

    /// Bid price to place a sell at so that receiving `value` quote currency fills.
    ///
    /// The level index is computed by walking the asks and then read from the
    /// bids; see [`walk::sell_walk`].
    pub async fn sell_price_by_amount(&self, value: f64) -> Result<Option<f64>, YobitError> {
        let Some(book) = self.order_book().await? else {
            return Ok(None);
        };
        let PriceWalk { index, .. } = walk::sell_walk(&book.asks, value);
        let price = walk::price_at(&book, BookSide::Bids, index)?;

        tracing::info!(
            "Sell price for receive {} {} will be: {:.8}",
            value,
            self.right(),
            price
        );
        Ok(Some(price))
    }

    /// Buy price on the current pair for `amount` expressed through another pair.
    ///
    /// `amount` is divided by the last price of `pair` (default
    /// [`DEFAULT_CONVERSION_PAIR`]) and the result is passed to
    /// [`buy_price_by_amount`](Self::buy_price_by_amount) on the current pair.
    ///
    /// Fails when the conversion price is unavailable, zero or not finite.
    pub async fn get_sell_price(
        &self,
        amount: f64,
        pair: Option<&str>,
    ) -> Result<Option<f64>, YobitError> {
        let pair = pair.unwrap_or(DEFAULT_CONVERSION_PAIR);
        tracing::info!("Calculating volume {amount} equivalent in pair {pair}");

        // The conversion price is required even under the compat policy.
        let price = self
            .last_price(Some(pair))
            .await?
            .ok_or_else(|| YobitError::absent(format!("last price for {pair}")))?;
        if price == 0.0 || !price.is_finite() {
            return Err(YobitError::InvalidResponse(format!(
                "Cannot convert {amount} through {pair} at last price {price}"
            )));
        }
        self.buy_price_by_amount(amount / price).await
    }

    async fn order_book(&self) -> Result<Option<OrderBook>, YobitError> {
        let pair = self.pair();
        let request = DepthRequest::new(pair.as_str());
        match self.recover(self.source.get_depth(&request).await)? {
            Some(books) => take_pair(books, &pair).map(Some),
            None => Ok(None),
        }
    }

    async fn trades(&self) -> Result<Option<Vec<Trade>>, YobitError> {
        let pair = self.pair();
        let request = TradesRequest::new(pair.as_str());
        match self.recover(self.source.get_trades(&request).await)? {
            Some(trades) => take_pair(trades, &pair).map(Some),
            None => Ok(None),
        }
    }

    /// Apply the failure policy to a fetch result.
    fn recover<T>(&self, result: Result<T, YobitError>) -> Result<Option<T>, YobitError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_http_failure() && self.failure_policy.swallows_http_failures() => {
                tracing::warn!(pair = %self.pair, "{}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl<S> std::fmt::Display for MarketClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair: {}", self.pair)
    }
}

fn take_pair<T>(mut map: HashMap<String, T>, pair: &str) -> Result<T, YobitError> {
    map.remove(pair)
        .ok_or_else(|| YobitError::absent(format!("pair {pair} in response")))
}

/// Builder for [`MarketClient`].
pub struct MarketClientBuilder<S> {
    pair: Pair,
    source: S,
    failure_policy: FailurePolicy,
}

impl MarketClientBuilder<YobitRestClient> {
    /// Create a new builder for `ltc_btc` on the live REST API.
    pub fn new() -> Self {
        Self {
            pair: Pair::default(),
            source: YobitRestClient::new(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl Default for MarketClientBuilder<YobitRestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> MarketClientBuilder<S> {
    /// Set the base currency symbol.
    pub fn left(mut self, left: impl Into<String>) -> Self {
        self.pair.left = left.into();
        self
    }

    /// Set the quote currency symbol.
    pub fn right(mut self, right: impl Into<String>) -> Self {
        self.pair.right = right.into();
        self
    }

    /// Set both symbols from a pair.
    pub fn pair(mut self, pair: Pair) -> Self {
        self.pair = pair;
        self
    }

    /// Set the failure policy.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Use another data source (a mock, or a REST client with a custom base URL).
    pub fn source<T: MarketDataSource>(self, source: T) -> MarketClientBuilder<T> {
        MarketClientBuilder {
            pair: self.pair,
            source,
            failure_policy: self.failure_policy,
        }
    }

    /// Build the client.
    pub fn build(self) -> MarketClient<S> {
        MarketClient {
            pair: self.pair,
            source: self.source,
            failure_policy: self.failure_policy,
        }
    }
}
