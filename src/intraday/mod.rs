mod model;

pub use model::IntradayBar;

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::core::{
    MsClient, MsError, Paginated, Sort, conversions::date_to_api, net, wire::comma_joined,
};

/// Bar width for the intraday endpoints.
///
/// Intervals below one hour require a plan with real-time data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    I1min,
    #[serde(rename = "5min")]
    I5min,
    #[serde(rename = "10min")]
    I10min,
    #[serde(rename = "15min")]
    I15min,
    #[serde(rename = "30min")]
    I30min,
    #[serde(rename = "1hour")]
    I1hour,
    #[serde(rename = "3hour")]
    I3hour,
    #[serde(rename = "6hour")]
    I6hour,
    #[serde(rename = "12hour")]
    I12hour,
    #[serde(rename = "24hour")]
    I24hour,
}

impl Interval {
    /// The wire spelling, e.g. `1hour`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1min => "1min",
            Self::I5min => "5min",
            Self::I10min => "10min",
            Self::I15min => "15min",
            Self::I30min => "30min",
            Self::I1hour => "1hour",
            Self::I3hour => "3hour",
            Self::I6hour => "6hour",
            Self::I12hour => "12hour",
            Self::I24hour => "24hour",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query options for the intraday endpoints: the end-of-day set plus `interval`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntradayOptions {
    /// Ticker symbols, sent as one comma-joined `symbols` value.
    #[serde(serialize_with = "comma_joined", skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<String>,
    /// Restrict to one exchange by MIC.
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
    /// Bar width; the API defaults to `1hour`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
}

impl IntradayOptions {
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

    /// Sets `date_from` verbatim (a date or an ISO-8601 date-time).
    #[must_use]
    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    /// Sets `date_to` verbatim (a date or an ISO-8601 date-time).
    #[must_use]
    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    /// Sets both ends of the range from calendar dates.
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

    /// Sets the bar width.
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }
}

impl MsClient {
    /// Fetches intraday bars.
    ///
    /// **Endpoint:** `GET /intraday`
    ///
    /// # Errors
    ///
    /// Returns an `MsError` if no API key is configured, the request fails, the
    /// API rejects it (e.g. the plan lacks intraday access), or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/intraday")))]
    pub async fn intraday(
        &self,
        opts: &IntradayOptions,
    ) -> Result<Paginated<IntradayBar>, MsError> {
        net::get_json(self, "/intraday", Some(opts)).await
    }

    /// Fetches the most recent intraday bar for each requested symbol.
    ///
    /// **Endpoint:** `GET /intraday/latest`
    ///
    /// # Errors
    ///
    /// See [`MsClient::intraday`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/intraday/latest")))]
    pub async fn intraday_latest(
        &self,
        opts: &IntradayOptions,
    ) -> Result<Paginated<IntradayBar>, MsError> {
        net::get_json(self, "/intraday/latest", Some(opts)).await
    }
}
