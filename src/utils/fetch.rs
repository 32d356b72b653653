//! Network fetching utilities.
//!
//! Each content section issues its own independent GET request; there is
//! no caching, de-duplication, or automatic retry. No timeout is enforced:
//! a hung request simply never settles its section's state.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::core::error::ContentError;

/// Fetch a URL and deserialize the JSON response into `T`.
///
/// Non-success statuses become [`ContentError::Http`]; a payload that does
/// not match the target schema becomes [`ContentError::Decode`].
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ContentError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ContentError::Http(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ContentError::Network(e.to_string()))?;

    serde_json::from_str(&text).map_err(|e| ContentError::Decode(e.to_string()))
}
