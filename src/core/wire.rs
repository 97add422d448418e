use serde::{Deserialize, Deserializer, Serializer};

use crate::core::error::ApiError;

/// Body of a non-200 response: `{"error": {"code": ..., "message": ..., "context": ...}}`.
#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: Option<ApiError>,
}

/// Treat a JSON `null` as the type's default (`""`, `false`, ...).
///
/// marketstack sends `null` for many descriptive fields instead of omitting them.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serialize a list as one comma-joined value (`AAPL,GOOG`), the form the
/// `symbols` parameter expects. An empty list serializes as `""` and is then
/// dropped by the query encoder.
pub(crate) fn comma_joined<S>(items: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&items.join(","))
}
