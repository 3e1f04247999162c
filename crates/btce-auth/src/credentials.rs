//! API credentials and HMAC-SHA512 request signing
//!
//! # Security
//!
//! The secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Keeps the secret out of `Debug` output
//! - Requires explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha512;

use crate::encoding::Params;
use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the public API key
pub const API_KEY_ENV: &str = "BTCE_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BTCE_API_SECRET";

/// Headers to attach to a signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Public API key, sent as the `Key` header
    pub key: String,
    /// Lowercase hex HMAC-SHA512 digest, sent as the `Sign` header
    pub sign: String,
}

/// Sign a parameter set with a raw secret
///
/// The payload is [`Params::encode`]; the key identifier is passed through
/// untouched and is not part of the signed bytes.
pub fn sign(secret: &[u8], key: &str, params: &Params) -> Signature {
    Signature {
        key: key.to_string(),
        sign: sign_payload(secret, &params.encode()),
    }
}

fn sign_payload(secret: &[u8], payload: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// API credentials for authenticated requests
///
/// The secret is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and its secret
    ///
    /// The secret is used verbatim as the HMAC key.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret = secret.as_ref();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            secret: SecretBox::new(Box::new(secret.as_bytes().to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BTCE_API_KEY` and `BTCE_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a fully assembled parameter set (including `nonce`)
    pub fn sign(&self, params: &Params) -> Signature {
        sign(self.secret.expose_secret(), &self.api_key, params)
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(idx, _)| &self.api_key[..idx]);
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", visible))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
