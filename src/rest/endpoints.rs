//! Yobit REST API endpoint constants.

/// Base URL for the Yobit public REST API (version 3).
pub const YOBIT_BASE_URL: &str = "https://yobit.net/api/3/";

/// Public endpoints (no authentication required).
///
/// Paths are relative to [`YOBIT_BASE_URL`]; pair-scoped endpoints take the
/// pair identifier as a trailing path segment.
pub mod public {
    /// Get exchange-wide pair metadata.
    pub const INFO: &str = "info";
    /// Get ticker information.
    pub const TICKER: &str = "ticker";
    /// Get order book.
    pub const DEPTH: &str = "depth";
    /// Get recent trades.
    pub const TRADES: &str = "trades";
}

/// Largest `limit` the depth and trades endpoints accept.
pub const MAX_LIMIT: u16 = 2000;

/// Number of levels/trades returned when no `limit` is sent.
pub const DEFAULT_LIMIT: usize = 150;
