use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::{conversions::parse_api_datetime, wire::null_as_default};

/// One intraday price bar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IntradayBar {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// Last traded price in the interval; `None` outside market hours.
    pub last: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

impl IntradayBar {
    /// The bar's date parsed into a `chrono` timestamp.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_api_datetime(&self.date)
    }
}
