//! Common domain types for the Yobit API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YobitError;

/// A trading pair, made of a base (`left`) and a quote (`right`) symbol.
///
/// On the wire the two symbols are joined with an underscore, e.g. `ltc_btc`.
/// Symbols are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    /// Base currency symbol.
    pub left: String,
    /// Quote currency symbol.
    pub right: String,
}

impl Pair {
    /// Create a pair from its base and quote symbols.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// The wire identifier, `left_right`.
    pub fn id(&self) -> String {
        format!("{}_{}", self.left, self.right)
    }
}

impl Default for Pair {
    fn default() -> Self {
        Self::new("ltc", "btc")
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.left, self.right)
    }
}

impl FromStr for Pair {
    type Err = YobitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once('_')
            .map(|(left, right)| Pair::new(left, right))
            .ok_or_else(|| YobitError::InvalidResponse(format!("Invalid pair identifier: {s}")))
    }
}

/// Side of the order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSide {
    /// Sell orders, ascending by price
    Asks,
    /// Buy orders, descending by price
    Bids,
}

impl std::fmt::Display for BookSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookSide::Asks => write!(f, "asks"),
            BookSide::Bids => write!(f, "bids"),
        }
    }
}

/// Taker side of a public trade.
///
/// Yobit reports `"bid"` for buys and `"ask"` for sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Buyer-initiated trade
    Bid,
    /// Seller-initiated trade
    Ask,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Bid => write!(f, "bid"),
            TradeSide::Ask => write!(f, "ask"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_id() {
        let mut pair = Pair::default();
        assert_eq!(pair.id(), "ltc_btc");
        pair.left = "doge".into();
        assert_eq!(pair.id(), "doge_btc");
        assert_eq!(pair.to_string(), "doge_btc");
    }

    #[test]
    fn test_pair_from_str() {
        let pair: Pair = "eth_usdt".parse().unwrap();
        assert_eq!(pair, Pair::new("eth", "usdt"));
        assert!("ethusdt".parse::<Pair>().is_err());
    }

    #[test]
    fn test_trade_side_serde() {
        let side: TradeSide = serde_json::from_str("\"bid\"").unwrap();
        assert_eq!(side, TradeSide::Bid);
        assert_eq!(serde_json::to_string(&TradeSide::Ask).unwrap(), "\"ask\"");
    }

    #[test]
    fn test_book_side_display() {
        assert_eq!(BookSide::Asks.to_string(), "asks");
        assert_eq!(BookSide::Bids.to_string(), "bids");
    }
}
