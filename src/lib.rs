//! # Yobit Client
//!
//! An async Rust client library for the Yobit exchange public REST API.
//!
//! ## Features
//!
//! - Typed access to the `info`, `ticker`, `depth` and `trades` endpoints
//! - A pair-scoped [`MarketClient`](market::MarketClient) with price-impact estimates
//! - Pluggable data source for testing
//! - Configurable handling of non-200 answers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yobit_api_client::market::MarketClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketClient::new();
//!     let depth = client.depth_to(0.0125).await?;
//!     println!("Depth to 0.0125: {:?}", depth);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod market;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::YobitError;
pub use market::{FailurePolicy, MarketClient};
pub use types::common::{BookSide, Pair, TradeSide};

/// Result type alias using YobitError
pub type Result<T> = std::result::Result<T, YobitError>;
