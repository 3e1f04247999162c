//! Request signing and nonce management for the BTC-e trade API
//!
//! Every private (`/tapi`) request carries a strictly increasing nonce and an
//! HMAC-SHA512 signature over its percent-encoded parameters. This crate
//! provides the pieces needed to build such a request; it performs no I/O.
//!
//! # Example
//!
//! ```
//! use btce_auth::{Credentials, NonceSource, CounterNonce, Params};
//!
//! let creds = Credentials::new("my-key", "my-secret").unwrap();
//! let nonces = CounterNonce::starting_at(1_400_000_000);
//!
//! let mut params = Params::with_method("getInfo");
//! params.insert("nonce", nonces.next_nonce());
//!
//! let signature = creds.sign(&params);
//! assert_eq!(signature.key, "my-key");
//! assert_eq!(signature.sign.len(), 128);
//! ```

mod credentials;
mod encoding;
mod error;
mod nonce;

pub use credentials::{sign, Credentials, Signature};
pub use encoding::{percent_encode, Params};
pub use error::{AuthError, AuthResult};
pub use nonce::{CounterNonce, NonceSource};
