//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (4xx → [`ClientError::ClientRejected`],
//! any other non-success → [`ClientError::ServerRejected`]) and JSON decoding
//! so the operation methods stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. The body of a rejected response
/// is kept for diagnostics but never interpreted.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    if status.is_client_error() {
        Err(ClientError::ClientRejected {
            status: status.as_u16(),
            body,
        })
    } else {
        Err(ClientError::ServerRejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Read the full body and decode it as JSON.
///
/// A body that fails to arrive is a transport error; a body that arrives but
/// does not parse is a decode error.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
