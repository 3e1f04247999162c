//! Signed request assembly for the private `/tapi` endpoint

use btce_auth::{Credentials, NonceSource, Params};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::envelope::decode_private;
use crate::error::RestResult;
use crate::transport::{HttpRequest, HttpTransport};
use crate::types::ToParams;

/// Borrowed view of everything a signed call needs
#[derive(Clone, Copy)]
pub(crate) struct PrivateApi<'a> {
    transport: &'a dyn HttpTransport,
    credentials: &'a Credentials,
    nonces: &'a dyn NonceSource,
    url: &'a str,
}

impl<'a> PrivateApi<'a> {
    pub(crate) fn new(
        transport: &'a dyn HttpTransport,
        credentials: &'a Credentials,
        nonces: &'a dyn NonceSource,
        url: &'a str,
    ) -> Self {
        Self {
            transport,
            credentials,
            nonces,
            url,
        }
    }

    /// Build the signed POST for `method`
    ///
    /// Consumes exactly one nonce. The nonce is taken before anything is
    /// sent, so a failed call still advances the counter.
    pub(crate) fn prepare(&self, method: &str, options: impl ToParams) -> HttpRequest {
        let mut params = Params::with_method(method);
        options.write_params(&mut params);

        let nonce = self.nonces.next_nonce();
        params.insert("nonce", nonce);

        let signature = self.credentials.sign(&params);
        debug!(method, nonce, params = params.len(), "Sending signed request");

        HttpRequest::post(self.url, params.encode())
            .header("Key", signature.key)
            .header("Sign", signature.sign)
            .header("Content-Type", "application/x-www-form-urlencoded")
    }

    /// Sign, send, and unwrap the envelope of one private call
    pub(crate) async fn call<T, O>(&self, method: &str, options: O) -> RestResult<T>
    where
        T: DeserializeOwned,
        O: ToParams,
    {
        let request = self.prepare(method, options);
        let response = self.transport.send(request).await?;
        decode_private(&response)
    }
}
