use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

/// GET `url` and decode the JSON body as `T`.
///
/// The URL is handed to the client as-is. A non-2xx response fails with
/// [`FetchError::Http`] without reading the body. The decode only checks what
/// `T` declares; extra fields are ignored.
pub async fn fetch_json<T: DeserializeOwned>(http: &Client, url: &str) -> Result<T, FetchError> {
    let res = http.get(url).send().await?;

    let status = res.status();
    debug!(%status, path = res.url().path(), "received response");

    if !status.is_success() {
        return Err(FetchError::from_status(status));
    }

    let body = res.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
