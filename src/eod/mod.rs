mod model;

pub use model::EodBar;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{
    MsClient, MsError, Paginated, Sort, conversions::date_to_api, net, wire::comma_joined,
};

/// Query options for the end-of-day endpoints.
///
/// Every field is optional and unset fields are left out of the request, but
/// the API rejects price queries without at least one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EodOptions {
    /// Ticker symbols, sent as one comma-joined `symbols` value.
    #[serde(serialize_with = "comma_joined", skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<String>,
    /// Restrict to one exchange by MIC (e.g. `XNAS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Order by date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    /// Start of the range, `YYYY-MM-DD` or ISO-8601 date-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// End of the range, `YYYY-MM-DD` or ISO-8601 date-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// Maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl EodOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbols to query.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts results to one exchange (MIC).
    #[must_use]
    pub fn exchange(mut self, mic: impl Into<String>) -> Self {
        self.exchange = Some(mic.into());
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets `date_from` verbatim.
    #[must_use]
    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    /// Sets `date_to` verbatim.
    #[must_use]
    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    /// Sets both ends of the range from calendar dates (inclusive).
    #[must_use]
    pub fn date_range(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from(date_to_api(from)).date_to(date_to_api(to))
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
    /// Fetches end-of-day bars, optionally bounded by `date_from`/`date_to`.
    ///
    /// **Endpoint:** `GET /eod`
    ///
    /// # Errors
    ///
    /// Returns an `MsError` if no API key is configured, the request fails, the
    /// API rejects it, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/eod")))]
    pub async fn eod(&self, opts: &EodOptions) -> Result<Paginated<EodBar>, MsError> {
        net::get_json(self, "/eod", Some(opts)).await
    }

    /// Fetches the most recent end-of-day bar for each requested symbol.
    ///
    /// **Endpoint:** `GET /eod/latest`
    ///
    /// # Errors
    ///
    /// See [`MsClient::eod`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/eod/latest")))]
    pub async fn eod_latest(&self, opts: &EodOptions) -> Result<Paginated<EodBar>, MsError> {
        net::get_json(self, "/eod/latest", Some(opts)).await
    }

    /// Fetches end-of-day bars for one trading day (`YYYY-MM-DD`).
    ///
    /// **Endpoint:** `GET /eod/{date}`
    ///
    /// # Errors
    ///
    /// See [`MsClient::eod`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts)))]
    pub async fn eod_by_date(
        &self,
        date: &str,
        opts: &EodOptions,
    ) -> Result<Paginated<EodBar>, MsError> {
        net::get_json(self, &format!("/eod/{date}"), Some(opts)).await
    }

    /// Like [`eod_by_date`](Self::eod_by_date), taking a calendar date.
    ///
    /// # Errors
    ///
    /// See [`MsClient::eod`].
    pub async fn eod_on(
        &self,
        date: NaiveDate,
        opts: &EodOptions,
    ) -> Result<Paginated<EodBar>, MsError> {
        self.eod_by_date(&date_to_api(date), opts).await
    }
}
