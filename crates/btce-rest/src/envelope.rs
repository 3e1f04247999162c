//! Response envelope handling
//!
//! Private responses are wrapped as `{"success": 0|1, "error": "...",
//! "return": payload}`. The payload is only decoded after the success flag
//! has been checked. Public responses are bare payloads, except for failures
//! which come back as `{"error": "..."}`.

use btce_types::serde_util::deserialize_flag;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::{RestError, RestResult};
use crate::transport::HttpResponse;

/// Longest raw body excerpt kept in a status error
const MAX_BODY_EXCERPT: usize = 256;

/// Standard private API response wrapper
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Success flag (`1` success, `0` failure)
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub success: bool,
    /// Error message (present on failure)
    #[serde(default)]
    pub error: Option<String>,
    /// Undecoded payload (present on success)
    #[serde(default, rename = "return")]
    pub payload: Option<serde_json::Value>,
}

impl Envelope {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Decode the payload, or surface the exchange message on failure
    pub fn into_result<T: DeserializeOwned>(self) -> RestResult<T> {
        if !self.success {
            let message = self
                .error
                .unwrap_or_else(|| "request failed without an error message".to_string());
            return Err(RestError::Api { message });
        }

        // A success without `return` decodes like an explicit null, so unit-like
        // targets still work while structs report a missing payload.
        let payload = self.payload.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(payload)?)
    }
}

/// Error body used by public endpoints and non-200 responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    /// Message supplied by the exchange
    pub error: String,
}

/// Turn a non-200 response into a status error
///
/// The body is decoded as an [`ErrorResponse`] if possible; otherwise a short
/// excerpt of the raw body is kept.
pub(crate) fn status_error(response: &HttpResponse) -> RestError {
    let message = match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(body) => body.error,
        Err(_) => {
            let body = response.body.trim();
            if body.is_empty() {
                format!("HTTP status {}", response.status)
            } else {
                body.chars().take(MAX_BODY_EXCERPT).collect()
            }
        }
    };

    warn!(status = response.status, %message, "Non-OK HTTP status");
    RestError::Status {
        status: response.status,
        message,
    }
}

/// Decode a private (`/tapi`) response
pub(crate) fn decode_private<T: DeserializeOwned>(response: &HttpResponse) -> RestResult<T> {
    if !response.is_ok() {
        return Err(status_error(response));
    }

    let envelope: Envelope = serde_json::from_str(&response.body)?;
    envelope.into_result().map_err(|err| {
        if let RestError::Api { message } = &err {
            warn!(%message, "Exchange rejected request");
        }
        err
    })
}

/// Decode a public (`/api/2`) response
pub(crate) fn decode_public<T: DeserializeOwned>(response: &HttpResponse) -> RestResult<T> {
    if !response.is_ok() {
        return Err(status_error(response));
    }

    let value: serde_json::Value = serde_json::from_str(&response.body)?;
    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        warn!(%message, "Public endpoint returned error");
        return Err(RestError::api(message));
    }

    Ok(serde_json::from_value(value)?)
}

/// A record delivered inside an id-keyed history mapping
pub trait Keyed {
    /// Store the mapping key on the record
    fn set_id(&mut self, id: u64);
}

/// Flatten an `{id: record}` mapping into records ordered by ascending id
pub fn flatten_keyed<T: Keyed>(map: BTreeMap<u64, T>) -> Vec<T> {
    map.into_iter()
        .map(|(id, mut record)| {
            record.set_id(id);
            record
        })
        .collect()
}

/// Id-keyed history payload
///
/// The exchange answers an empty history with `success: 0` and a "no
/// trades"/"no orders" message on some endpoints; that is surfaced as an API
/// error like any other failure.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct KeyedPayload<T>(pub BTreeMap<u64, T>);

impl<T: Keyed> KeyedPayload<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        flatten_keyed(self.0)
    }
}
