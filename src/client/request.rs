//! The shared request path
//!
//! Every endpoint function funnels through [`api_request`]: build the URL,
//! encode the options, attach the auth key, send the GET, check the status,
//! decode the JSON, and hand the payload to the response validator.

use super::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::wire;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Perform a GET request against an API endpoint and validate the response
/// into `T`.
///
/// The config's auth key is appended as the `key` query parameter unless the
/// options already carry one. Failures are never swallowed: a non-2xx status
/// becomes [`Error::HttpStatus`], a malformed payload becomes
/// [`Error::Shape`].
pub(crate) async fn api_request<T, O>(
    config: &ConnectionConfig,
    path: &str,
    options: Option<&O>,
) -> Result<T>
where
    T: DeserializeOwned,
    O: Serialize,
{
    let mut url = config.endpoint_url(path)?;

    let mut pairs = match options {
        Some(options) => wire::encode(options)?,
        None => Vec::new(),
    };
    if let Some(key) = config.api_key() {
        if !pairs.iter().any(|(name, _)| name == "key") {
            pairs.push(("key".to_string(), key.to_string()));
        }
    }
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(&pairs);
    }

    debug!(path = url.path(), params = pairs.len(), "api request");

    let response = config.http().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::http_status(status.as_u16(), body));
    }

    let raw: Value = response.json().await?;
    wire::from_wire(raw)
}

/// [`api_request`] without request options.
pub(crate) async fn api_get<T: DeserializeOwned>(config: &ConnectionConfig, path: &str) -> Result<T> {
    api_request::<T, ()>(config, path, None).await
}
