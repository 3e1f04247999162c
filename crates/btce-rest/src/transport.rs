//! HTTP transport abstraction
//!
//! The client never talks to `reqwest` directly; it hands fully built
//! requests to an [`HttpTransport`]. This keeps signing and envelope handling
//! testable without a network, and lets callers supply their own HTTP stack.
//!
//! # Example
//!
//! ```no_run
//! use btce_rest::transport::{HttpRequest, HttpTransport, ReqwestTransport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = ReqwestTransport::new(std::time::Duration::from_secs(10), "my-bot/1.0")?;
//! let response = transport
//!     .send(HttpRequest::get("https://btc-e.com/api/2/btc_usd/fee"))
//!     .await?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection could not be established
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete in time
    #[error("request timed out")]
    Timeout,

    /// Any other failure while sending or reading the response
    #[error("request failed: {0}")]
    Request(String),

    /// The HTTP client could not be constructed
    #[error("client build failed: {0}")]
    Build(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            Self::Build(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET (public endpoints)
    Get,
    /// POST (private endpoints)
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A fully built outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
    /// Request body (already encoded)
    pub body: Option<String>,
}

impl HttpRequest {
    /// Build a GET request without headers or body
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build a POST request with an encoded body
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive name)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 200 OK
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations perform exactly one exchange per call and must not retry.
/// Timeouts and cancellation are the implementation's own concern.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the raw response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Real transport using `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a request timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, len = body.len(), "Received response");
        Ok(HttpResponse { status, body })
    }
}

/// Mock transport for testing
///
/// Replays queued responses in order and records every request it was given.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<HttpResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<HttpRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given body
    pub fn push_json(&self, body: impl Into<String>) {
        self.push_response(HttpResponse::new(200, body));
    }

    /// Queue an arbitrary response
    pub fn push_response(&self, response: HttpResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// All requests sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no mock response queued".into())))
    }
}
