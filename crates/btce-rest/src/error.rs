//! Error types for REST API operations

use btce_auth::AuthError;

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
///
/// Every error is terminal for the call that produced it. Nothing is retried
/// automatically: a private call has already consumed its nonce by the time
/// it can fail.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The request never produced an HTTP response (connect failure, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-200 status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or the body itself
        message: String,
    },

    /// The exchange rejected the request (`success: 0` or `{"error": ...}`)
    #[error("API error: {message}")]
    Api {
        /// Message supplied by the exchange
        message: String,
    },

    /// The response body was not valid JSON or had an unexpected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credentials could not be loaded
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Create an API error from the message returned by the exchange
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// HTTP status attached to this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the exchange, if the server produced one
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } | Self::Status { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Check if the exchange rejected the nonce as already used
    pub fn is_invalid_nonce(&self) -> bool {
        self.api_message()
            .is_some_and(|m| m.to_ascii_lowercase().contains("invalid nonce"))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = RestError::api("boom");
        assert_eq!(err.api_message(), Some("boom"));
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "API error: boom");
    }

    #[test]
    fn test_status_error_carries_code() {
        let err = RestError::Status {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.api_message(), Some("maintenance"));
    }

    #[test]
    fn test_invalid_nonce_detection() {
        let err = RestError::api("invalid nonce parameter; on key:1400000005, you sent:1400000001");
        assert!(err.is_invalid_nonce());
        assert!(!RestError::api("api key dont have trade permission").is_invalid_nonce());
        assert!(!RestError::AuthRequired.is_invalid_nonce());
    }

    #[test]
    fn test_decode_error_is_distinct() {
        let err: RestError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, RestError::Decode(_)));
        assert_eq!(err.api_message(), None);
    }
}
