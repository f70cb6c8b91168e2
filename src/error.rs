//! Error types for the Yobit client library.

use thiserror::Error;

use crate::types::BookSide;

/// The main error type for all Yobit client operations.
#[derive(Error, Debug)]
pub enum YobitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The exchange answered with a status other than 200 OK
    #[error("Error, status code: {status}")]
    HttpStatus {
        /// Status code returned by the exchange
        status: u16,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Yobit API returned an error payload
    #[error("Yobit API error: {0}")]
    Api(ApiError),

    /// A successful response did not contain the expected data
    #[error("Missing data in response: {what}")]
    DataAbsent {
        /// Description of the missing key or entry
        what: String,
    },

    /// Fewer trades were returned than were requested
    #[error("Requested {requested} trades but only {available} are available")]
    NotEnoughTrades {
        /// Number of trades requested
        requested: usize,
        /// Number of trades returned by the exchange
        available: usize,
    },

    /// A computed order book index fell past the end of the book
    #[error("Index {index} is out of range for {side} side with {len} levels")]
    BookIndexOutOfRange {
        /// Book side that was indexed
        side: BookSide,
        /// Computed index
        index: usize,
        /// Number of levels on that side
        len: usize,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl YobitError {
    /// Shorthand for a [`YobitError::DataAbsent`] error.
    pub(crate) fn absent(what: impl Into<String>) -> Self {
        YobitError::DataAbsent { what: what.into() }
    }

    /// Whether this is the non-200 HTTP failure kind.
    pub fn is_http_failure(&self) -> bool {
        matches!(self, YobitError::HttpStatus { .. })
    }

    /// Whether this is the missing-data failure kind.
    pub fn is_data_absent(&self) -> bool {
        matches!(self, YobitError::DataAbsent { .. })
    }
}

/// An error reported by Yobit in the response body.
///
/// Yobit answers some bad requests with HTTP 200 and a body like
/// `{"success":0,"error":"Invalid pair name: abc_def"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract an API error from a decoded response body, if it carries one.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let object = body.as_object()?;
        let failed = object
            .get("success")
            .and_then(serde_json::Value::as_i64)
            .is_some_and(|success| success == 0);
        if !failed {
            return None;
        }
        let message = object
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown error");
        Some(Self::new(message))
    }

    /// Check if this error reports an unknown or malformed pair.
    pub fn is_invalid_pair(&self) -> bool {
        self.message.starts_with("Invalid pair name")
    }
}
