//! Transport seam — "issue a request, receive status + body".
//!
//! The SDK never talks to the network directly; every call goes through a
//! [`Transport`]. [`ReqwestTransport`] is the default, and tests plug in their own.

use async_trait::async_trait;

use crate::error::HttpError;

/// HTTP method subset used by the XTS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully-resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Pre-encoded JSON body.
    pub body: Option<String>,
}

impl TransportRequest {
    /// Look up a header value, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw status and body of a completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// The API signals success with exactly 200; anything else is a rejection.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must not retry. Dropping the returned future aborts the
/// in-flight request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, HttpError>;
}

// ─── reqwest ─────────────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub use self::reqwest_impl::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_impl {
    use super::*;
    use reqwest::Client;
    use std::time::Duration;

    /// [`Transport`] backed by a pooled `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new(timeout: Duration) -> Result<Self, HttpError> {
            let client = Client::builder()
                .timeout(timeout)
                .pool_max_idle_per_host(10)
                .build()?;
            Ok(Self { client })
        }

        /// Wrap an existing client (custom TLS, proxies, ...).
        pub fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: TransportRequest) -> Result<TransportResponse, HttpError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut req = self.client.request(method, &request.url);
            for (name, value) in request.headers {
                req = req.header(name, value);
            }
            if let Some(body) = request.body {
                req = req.body(body);
            }

            let resp = req.send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;

            Ok(TransportResponse { status, body })
        }
    }
}
