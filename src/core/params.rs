//! Query-parameter types shared across endpoints and the encoder that turns
//! an options struct into `key=value` pairs.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::core::MsError;

/// Sort order for price endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sort {
    /// Oldest first.
    #[serde(rename = "ASC")]
    Asc,
    /// Newest first (the API default).
    #[serde(rename = "DESC")]
    Desc,
}

/// `limit`/`offset` paging, used on its own by the currency and timezone lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    /// Maximum number of records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl PageOptions {
    /// Creates empty paging options (server defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

/// Appends every non-empty field of `params` to `url`'s query string.
///
/// `params` must serialize to a map (a struct, a `HashMap`, ...). `null`,
/// `""`, `0` and `false` are omitted. Sequences become repeated `key=value`
/// pairs; fields that must be comma-joined do so in their own serializer.
pub(crate) fn append_query<P>(url: &mut Url, params: &P) -> Result<(), MsError>
where
    P: Serialize + ?Sized,
{
    let fields = match serde_json::to_value(params).map_err(|e| MsError::Encode(e.to_string()))? {
        Value::Object(map) => map,
        Value::Null => return Ok(()),
        other => {
            return Err(MsError::Encode(format!(
                "parameters must serialize to a map, got `{other}`"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(v) = scalar(&key, item)? {
                        pairs.push((key.clone(), v));
                    }
                }
            }
            other => {
                if let Some(v) = scalar(&key, other)? {
                    pairs.push((key, v));
                }
            }
        }
    }

    url.query_pairs_mut().extend_pairs(pairs);
    Ok(())
}

fn scalar(key: &str, value: Value) -> Result<Option<String>, MsError> {
    Ok(match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => {
            return Err(MsError::Encode(format!(
                "parameter `{key}` is nested and cannot be encoded as a query value"
            )));
        }
    })
}
