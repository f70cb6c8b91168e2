//! Types for public REST API endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::rest::endpoints::MAX_LIMIT;
use crate::types::TradeSide;

/// Exchange-wide metadata returned by `info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    /// Server Unix timestamp.
    #[serde(default)]
    pub server_time: i64,
    /// Listed pairs keyed by identifier (e.g. `ltc_btc`).
    pub pairs: HashMap<String, PairInfo>,
}

/// Metadata for a single listed pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PairInfo {
    /// Number of decimal places allowed in prices.
    #[serde(default)]
    pub decimal_places: u32,
    /// Minimum allowed price.
    #[serde(default)]
    pub min_price: f64,
    /// Maximum allowed price.
    #[serde(default)]
    pub max_price: f64,
    /// Minimum order amount in base currency.
    #[serde(default)]
    pub min_amount: f64,
    /// Minimum order total in quote currency.
    #[serde(default)]
    pub min_total: f64,
    /// `0` when the pair is listed, `1` when it is hidden.
    pub hidden: u8,
    /// Trading fee, percent.
    #[serde(default)]
    pub fee: f64,
    /// Buyer fee, percent.
    #[serde(default)]
    pub fee_buyer: f64,
    /// Seller fee, percent.
    #[serde(default)]
    pub fee_seller: f64,
}

impl PairInfo {
    /// Whether the pair is hidden from the exchange front page.
    pub fn is_hidden(&self) -> bool {
        self.hidden == 1
    }
}

/// Ticker information for a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// 24h high.
    #[serde(default)]
    pub high: f64,
    /// 24h low.
    #[serde(default)]
    pub low: f64,
    /// 24h average price.
    #[serde(default)]
    pub avg: f64,
    /// 24h volume in quote currency.
    #[serde(default)]
    pub vol: f64,
    /// 24h volume in base currency.
    #[serde(default)]
    pub vol_cur: f64,
    /// Last trade price.
    pub last: f64,
    /// Best buy price.
    #[serde(default)]
    pub buy: f64,
    /// Best sell price.
    #[serde(default)]
    pub sell: f64,
    /// Unix timestamp of the last update.
    #[serde(default)]
    pub updated: i64,
}

/// Request parameters for order book depth.
#[derive(Debug, Clone, Serialize)]
pub struct DepthRequest {
    /// Pair identifier(s), hyphen separated.
    #[serde(skip)]
    pub pair: String,
    /// Maximum number of levels per side (default: 150, max: 2000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
}

impl DepthRequest {
    /// Create a new depth request.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            limit: None,
        }
    }

    /// Set the level limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit.min(MAX_LIMIT));
        self
    }
}

/// Order book data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBook {
    /// Ask side entries, ascending by price.
    #[serde(default)]
    pub asks: Vec<OrderBookLevel>,
    /// Bid side entries, descending by price.
    #[serde(default)]
    pub bids: Vec<OrderBookLevel>,
}

impl OrderBook {
    /// Lowest ask, if any.
    pub fn best_ask(&self) -> Option<&OrderBookLevel> {
        self.asks.first()
    }

    /// Highest bid, if any.
    pub fn best_bid(&self) -> Option<&OrderBookLevel> {
        self.bids.first()
    }
}

/// Single order book level.
/// Format: [price, volume]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderBookLevel {
    /// Price level.
    pub price: f64,
    /// Volume at price level, in base currency.
    pub volume: f64,
}

impl OrderBookLevel {
    /// Create a level from price and volume.
    pub fn new(price: f64, volume: f64) -> Self {
        Self { price, volume }
    }

    /// Notional volume of the level (`price * volume`), in quote currency.
    pub fn notional(&self) -> f64 {
        self.volume * self.price
    }
}

impl<'de> Deserialize<'de> for OrderBookLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (f64, f64) = Deserialize::deserialize(deserializer)?;
        Ok(OrderBookLevel {
            price: arr.0,
            volume: arr.1,
        })
    }
}

/// Request parameters for recent trades.
#[derive(Debug, Clone, Serialize)]
pub struct TradesRequest {
    /// Pair identifier(s), hyphen separated.
    #[serde(skip)]
    pub pair: String,
    /// Maximum number of trades (default: 150, max: 2000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
}

impl TradesRequest {
    /// Create a new recent trades request.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            limit: None,
        }
    }

    /// Set the trade limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit.min(MAX_LIMIT));
        self
    }
}

/// Single public trade, newest first in responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    /// Taker side.
    #[serde(rename = "type", default)]
    pub side: Option<TradeSide>,
    /// Trade price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Trade amount in base currency.
    pub amount: f64,
    /// Trade ID.
    #[serde(default)]
    pub tid: Option<u64>,
    /// Unix timestamp.
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Any other fields the exchange sent, kept as-is.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
