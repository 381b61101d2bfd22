//! Low-level HTTP client — `XtsHttp`.
//!
//! Resolves paths against the configured base URL, encodes queries and bodies,
//! attaches the auth headers, and hands the request to the [`Transport`].
//! Status interpretation is left to the sub-clients; each one maps a non-200
//! into its own error class.

use std::sync::Arc;

use serde::Serialize;

use crate::error::HttpError;
use crate::http::transport::{Method, Transport, TransportRequest, TransportResponse};

/// Low-level HTTP client for the XTS interactive API.
pub struct XtsHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl XtsHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL and append the encoded query pairs.
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url = format!("{}?{}", url, pairs.join("&"));
        }
        url
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    /// Unauthenticated POST (login only).
    pub(crate) async fn post_public<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<TransportResponse, HttpError> {
        self.request(Method::Post, path, &[], None, Some(body)).await
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> Result<TransportResponse, HttpError> {
        self.request::<()>(Method::Get, path, query, Some(token), None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<TransportResponse, HttpError> {
        self.request(Method::Post, path, &[], Some(token), Some(body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<TransportResponse, HttpError> {
        self.request(Method::Put, path, &[], Some(token), Some(body)).await
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> Result<TransportResponse, HttpError> {
        self.request::<()>(Method::Delete, path, query, Some(token), None).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<TransportResponse, HttpError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| HttpError::Serialize(e.to_string()))?;

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("authorization".to_string(), token.to_string()));
        }

        let request = TransportRequest {
            method,
            url: self.url(path, query),
            headers,
            body,
        };

        let resp = self.transport.send(request).await?;
        tracing::debug!(method = %method, path, status = resp.status, "XTS request completed");
        Ok(resp)
    }
}

impl Clone for XtsHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NoopTransport;

    #[async_trait]
    impl Transport for NoopTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, HttpError> {
            Err(HttpError::Transport("offline".into()))
        }
    }

    fn http(base: &str) -> XtsHttp {
        XtsHttp::new(base, Arc::new(NoopTransport))
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        assert_eq!(http("https://xts.example.com/").base_url(), "https://xts.example.com");
    }

    #[test]
    fn test_url_joins_path() {
        let h = http("https://xts.example.com/");
        assert_eq!(
            h.url("/interactive/orders", &[]),
            "https://xts.example.com/interactive/orders"
        );
        assert_eq!(
            h.url("interactive/orders", &[]),
            "https://xts.example.com/interactive/orders"
        );
    }

    #[test]
    fn test_url_encodes_query() {
        let h = http("https://xts.example.com");
        let url = h.url(
            "/interactive/orders",
            &[("appOrderID", "42".to_string()), ("clientID", "A B&C".to_string())],
        );
        assert_eq!(
            url,
            "https://xts.example.com/interactive/orders?appOrderID=42&clientID=A%20B%26C"
        );
    }

    #[test]
    fn test_transport_error_propagates() {
        let h = http("https://xts.example.com");
        let err =
            tokio_test::block_on(h.get("/interactive/user/profile", &[], "tok")).unwrap_err();
        assert!(matches!(err, HttpError::Transport(_)));
    }
}
