use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::{conversions::parse_api_datetime, wire::null_as_default};

/// One end-of-day price bar.
///
/// Numeric fields are `None` when the API sends `null` (common for the
/// adjusted series on recent or thinly traded days).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EodBar {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub adj_high: Option<f64>,
    pub adj_low: Option<f64>,
    pub adj_close: Option<f64>,
    pub adj_open: Option<f64>,
    pub adj_volume: Option<f64>,
    pub split_factor: Option<f64>,
    pub dividend: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exchange: String,
    /// Trading day as sent by the API, e.g. `2024-01-15T00:00:00+0000`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

impl EodBar {
    /// The bar's date parsed into a `chrono` timestamp.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_api_datetime(&self.date)
    }
}
