mod model;

pub use model::Exchange;

use serde::Serialize;

use crate::core::{MsClient, MsError, Paginated, net};

/// Query options for the exchange search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExchangesOptions {
    /// Free-text search over exchange name and acronym.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ExchangesOptions {
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
    /// Searches the exchanges known to the API.
    ///
    /// **Endpoint:** `GET /exchanges`
    ///
    /// # Errors
    ///
    /// Returns an `MsError` if no API key is configured, the request fails, the
    /// API rejects it, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/exchanges")))]
    pub async fn exchanges(&self, opts: &ExchangesOptions) -> Result<Paginated<Exchange>, MsError> {
        net::get_json(self, "/exchanges", Some(opts)).await
    }

    /// Looks up one exchange by MIC (e.g. `XNAS`).
    ///
    /// **Endpoint:** `GET /exchanges/{mic}`
    ///
    /// # Errors
    ///
    /// See [`MsClient::exchanges`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn exchange(&self, mic: &str) -> Result<Exchange, MsError> {
        net::get_json::<(), _>(self, &format!("/exchanges/{mic}"), None).await
    }
}
