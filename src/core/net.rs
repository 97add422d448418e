//! The request pipeline shared by every endpoint.

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{MsClient, MsError, params, wire::ErrorEnvelope};

/// Performs one authenticated GET against `endpoint` and decodes the body into `T`.
///
/// `endpoint` is appended verbatim to the base URL and must start with `/`.
/// `params`, when present, must serialize to a map; empty fields are skipped.
pub(crate) async fn get_json<P, T>(
    client: &MsClient,
    endpoint: &str,
    params: Option<&P>,
) -> Result<T, MsError>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = request_url(client, endpoint, params)?;

    let resp = client.http().get(url).send().await?;
    let status = resp.status().as_u16();
    let body = get_text(resp).await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(endpoint, status, bytes = body.len(), "marketstack response");

    if status != 200 {
        return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(ErrorEnvelope { error: Some(e) }) => MsError::Api(e),
            _ => MsError::Status { status, body },
        });
    }

    serde_json::from_str(&body).map_err(MsError::Json)
}

/// Builds `base_url + endpoint` with `access_key` and the non-empty `params` in the query.
///
/// Fails with [`MsError::MissingApiKey`] before anything else when no key is set.
pub(crate) fn request_url<P>(
    client: &MsClient,
    endpoint: &str,
    params: Option<&P>,
) -> Result<Url, MsError>
where
    P: Serialize + ?Sized,
{
    let api_key = client.api_key().ok_or(MsError::MissingApiKey)?;

    let mut url = Url::parse(&format!("{}{endpoint}", client.base_url()))?;
    url.query_pairs_mut().append_pair("access_key", api_key);
    if let Some(p) = params {
        params::append_query(&mut url, p)?;
    }
    Ok(url)
}

/// Reads the full response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, MsError> {
    resp.text().await.map_err(MsError::Body)
}
