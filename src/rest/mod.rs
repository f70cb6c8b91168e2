//! Yobit public REST API client.
//!
//! Provides typed access to the `info`, `ticker`, `depth` and `trades`
//! endpoints.
//!
//! # Trait-based API
//!
//! The [`MarketDataSource`] trait abstracts the endpoint fetches, enabling
//! mock implementations for testing and alternative transports.

mod client;
mod endpoints;
pub mod public;
mod traits;

pub use client::{YobitRestClient, YobitRestClientBuilder};
pub use endpoints::*;
pub use traits::MarketDataSource;
