//! Yobit REST API client implementation.

use std::collections::HashMap;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::{ApiError, YobitError};
use crate::rest::endpoints::YOBIT_BASE_URL;
use crate::rest::public::{DepthRequest, ExchangeInfo, OrderBook, Ticker, Trade, TradesRequest};
use crate::rest::traits::MarketDataSource;

/// The Yobit public REST API client.
///
/// Each method performs exactly one HTTP GET and decodes the JSON body.
/// There is no retry, rate limiting or caching.
///
/// # Example
///
/// ```rust,no_run
/// use yobit_api_client::rest::YobitRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = YobitRestClient::new();
///     let ticker = client.get_ticker("ltc_btc").await?;
///     println!("Last: {}", ticker["ltc_btc"].last);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct YobitRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl YobitRestClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> YobitRestClientBuilder {
        YobitRestClientBuilder::new()
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, YobitError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = Url::parse(&self.base_url)?.join(endpoint)?;
        let response = self.http_client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, YobitError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| YobitError::InvalidResponse(e.to_string()))?;
        let mut url = Url::parse(&self.base_url)?.join(endpoint)?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }
        let response = self.http_client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the Yobit API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, YobitError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("Error, status code: {}", status.as_u16());
            return Err(YobitError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            YobitError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })?;

        // Yobit reports request errors with 200 and a `success: 0` body.
        if let Some(api_error) = ApiError::from_body(&value) {
            return Err(YobitError::Api(api_error));
        }

        serde_json::from_value(value).map_err(|e| {
            YobitError::InvalidResponse(format!("Unexpected response shape: {}. Body: {}", e, body))
        })
    }
}

impl Default for YobitRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for YobitRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YobitRestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`YobitRestClient`].
pub struct YobitRestClientBuilder {
    base_url: String,
    user_agent: Option<String>,
}

impl YobitRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: YOBIT_BASE_URL.to_string(),
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> YobitRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("yobit-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("yobit-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        // Endpoint paths are joined beneath the base, which needs a trailing slash.
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        YobitRestClient {
            http_client: client,
            base_url,
        }
    }
}

impl Default for YobitRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// MarketDataSource trait implementation.

impl MarketDataSource for YobitRestClient {
    async fn get_info(&self) -> Result<ExchangeInfo, YobitError> {
        YobitRestClient::get_info(self).await
    }

    async fn get_ticker(&self, pairs: &str) -> Result<HashMap<String, Ticker>, YobitError> {
        YobitRestClient::get_ticker(self, pairs).await
    }

    async fn get_depth(
        &self,
        request: &DepthRequest,
    ) -> Result<HashMap<String, OrderBook>, YobitError> {
        YobitRestClient::get_depth(self, request).await
    }

    async fn get_trades(
        &self,
        request: &TradesRequest,
    ) -> Result<HashMap<String, Vec<Trade>>, YobitError> {
        YobitRestClient::get_trades(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_appends_trailing_slash() {
        let client = YobitRestClient::builder()
            .base_url("http://127.0.0.1:8080")
            .build();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_default_base_url() {
        let client = YobitRestClient::new();
        assert_eq!(client.base_url(), YOBIT_BASE_URL);
        assert!(format!("{client:?}").contains("yobit.net"));
    }
}
