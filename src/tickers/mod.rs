mod model;

pub use model::Ticker;

use serde::Serialize;

use crate::core::{MsClient, MsError, Paginated, net};

/// Query options for the ticker search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickersOptions {
    /// Free-text search over ticker name and symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to one exchange by MIC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl TickersOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Restricts results to one exchange (MIC).
    #[must_use]
    pub fn exchange(mut self, mic: impl Into<String>) -> Self {
        self.exchange = Some(mic.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the number of records to skip.
    #[must_use]
    pub const fn offset(mut self, n: u32) -> Self {
        self.offset = Some(n);
        self
    }
}

impl MsClient {
    /// Searches tickers.
    ///
    /// **Endpoint:** `GET /tickers`
    ///
    /// # Errors
    ///
    /// Returns an `MsError` if no API key is configured, the request fails, the
    /// API rejects it, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/tickers")))]
    pub async fn tickers(&self, opts: &TickersOptions) -> Result<Paginated<Ticker>, MsError> {
        net::get_json(self, "/tickers", Some(opts)).await
    }

    /// Looks up one ticker by symbol.
    ///
    /// **Endpoint:** `GET /tickers/{symbol}`
    ///
    /// # Errors
    ///
    /// See [`MsClient::tickers`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn ticker(&self, symbol: &str) -> Result<Ticker, MsError> {
        net::get_json::<(), _>(self, &format!("/tickers/{symbol}"), None).await
    }
}
