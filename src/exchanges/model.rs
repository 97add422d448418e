use serde::{Deserialize, Serialize};

use crate::core::wire::null_as_default;
use crate::currencies::Currency;
use crate::timezones::Timezone;

/// A stock exchange.
///
/// `timezone` and `currency` are absent from some payloads (e.g. the exchange
/// nested inside a ticker) and are modelled as optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Exchange {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub acronym: String,
    /// Market Identifier Code, e.g. `XNAS`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default)]
    pub timezone: Option<Timezone>,
    #[serde(default)]
    pub currency: Option<Currency>,
}
