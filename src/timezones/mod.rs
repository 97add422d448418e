use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::{MsClient, MsError, PageOptions, Paginated, net, wire::null_as_default};

/// A timezone, as listed by `/timezones` and embedded in exchange records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Timezone {
    /// IANA name, e.g. `America/New_York`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
    /// Standard-time abbreviation, e.g. `EST`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub abbr: String,
    /// Daylight-saving abbreviation, e.g. `EDT`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub abbr_dst: String,
}

impl Timezone {
    /// Resolves the IANA name, or `None` if `chrono-tz` does not know it.
    #[must_use]
    pub fn tz(&self) -> Option<Tz> {
        self.timezone.parse().ok()
    }
}

impl MsClient {
    /// Lists timezones known to the API.
    ///
    /// **Endpoint:** `GET /timezones`
    ///
    /// # Errors
    ///
    /// Returns an `MsError` if no API key is configured, the request fails, the
    /// API rejects it, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/timezones")))]
    pub async fn timezones(&self, opts: &PageOptions) -> Result<Paginated<Timezone>, MsError> {
        net::get_json(self, "/timezones", Some(opts)).await
    }
}
