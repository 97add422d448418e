use serde::{Deserialize, Serialize};

use crate::core::{MsClient, MsError, PageOptions, Paginated, net, wire::null_as_default};

/// A currency supported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. `USD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Display symbol, e.g. `$`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl MsClient {
    /// Lists supported currencies.
    ///
    /// **Endpoint:** `GET /currencies`
    ///
    /// # Errors
    ///
    /// Returns an `MsError` if no API key is configured, the request fails, the
    /// API rejects it, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts), fields(endpoint = "/currencies")))]
    pub async fn currencies(&self, opts: &PageOptions) -> Result<Paginated<Currency>, MsError> {
        net::get_json(self, "/currencies", Some(opts)).await
    }
}
