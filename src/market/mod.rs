//! Pair-scoped market queries.
//!
//! [`MarketClient`] wraps a [`MarketDataSource`](crate::rest::MarketDataSource)
//! and answers questions about one trading pair: availability, last price,
//! order book depth, recent trades and price-impact estimates.

mod client;
pub mod policy;
pub mod walk;

pub use client::{DEFAULT_CONVERSION_PAIR, MarketClient, MarketClientBuilder};
pub use policy::FailurePolicy;
