use serde::{Deserialize, Serialize};

use crate::core::wire::null_as_default;
use crate::exchanges::Exchange;

/// A listed instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ticker {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    /// Whether intraday bars are available for this symbol.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_intraday: bool,
    /// Whether end-of-day bars are available for this symbol.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_eod: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    /// The listing exchange; `None` when the API sends `null` or omits it.
    #[serde(default)]
    pub stock_exchange: Option<Exchange>,
}
