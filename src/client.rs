//! High-level client — `XtsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`; auth lives in
//! `auth/client.rs`. This module keeps the builder, the shared session state, and
//! the accessor methods.

use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;

use crate::auth::client::Auth;
use crate::auth::{Credentials, Session};
use crate::domain::order::client::Orders;
use crate::domain::profile::client::Profile;
use crate::error::{AuthError, SdkError};
use crate::http::{Transport, XtsHttp};
use crate::network;
use crate::shared::AccountKind;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::profile::client::Profile as ProfileClient;

/// Default per-request timeout of the bundled transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the XTS SDK.
///
/// Provides nested sub-client accessors: `client.auth()`, `client.orders()`,
/// `client.profile()`. Clones share the same session.
pub struct XtsClient {
    pub(crate) http: XtsHttp,
    pub(crate) credentials: Credentials,
    /// Dealer client code; ignored for investor sessions.
    pub(crate) client_id: String,
    /// Internal session state.
    pub(crate) session: Arc<RwLock<Session>>,
}

impl XtsClient {
    pub fn builder() -> XtsClientBuilder {
        XtsClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn profile(&self) -> Profile<'_> {
        Profile { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    // ── Session helpers ──────────────────────────────────────────────────

    /// Current token and account kind, or `NotAuthenticated` before login.
    pub(crate) async fn session_context(&self) -> Result<(String, AccountKind), SdkError> {
        let session = self.session.read().await;
        match (&session.token, session.account_kind) {
            (Some(token), Some(kind)) => Ok((token.clone(), kind)),
            _ => Err(AuthError::NotAuthenticated.into()),
        }
    }

    pub(crate) async fn token(&self) -> Result<String, SdkError> {
        self.session_context().await.map(|(token, _)| token)
    }
}

impl Clone for XtsClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            credentials: self.credentials.clone(),
            client_id: self.client_id.clone(),
            session: self.session.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct XtsClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    client_id: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for XtsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            client_id: String::new(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl XtsClientBuilder {
    /// Seed the builder from `XTS_BASE_URL`, `XTS_SECRET_KEY`, `XTS_APP_KEY`
    /// and `XTS_CLIENT_ID`. Unset variables are left for the caller to fill in.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(network::ENV_BASE_URL) {
            builder.base_url = Some(url);
        }
        if let (Ok(secret), Ok(app)) = (
            std::env::var(network::ENV_SECRET_KEY),
            std::env::var(network::ENV_APP_KEY),
        ) {
            builder.credentials = Some(Credentials::new(secret, app));
        }
        if let Ok(client_id) = std::env::var(network::ENV_CLIENT_ID) {
            builder.client_id = client_id;
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn credentials(mut self, secret_key: &str, app_key: &str) -> Self {
        self.credentials = Some(Credentials::new(secret_key, app_key));
        self
    }

    /// Client code used for dealer accounts.
    pub fn client_id(mut self, client_id: &str) -> Self {
        self.client_id = client_id.to_string();
        self
    }

    /// Per-request timeout of the bundled transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the bundled transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<XtsClient, SdkError> {
        let base_url = self
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| SdkError::Configuration("missing base url".to_string()))?;
        let credentials = self
            .credentials
            .ok_or_else(|| SdkError::Configuration("missing API credentials".to_string()))?;

        let transport = match self.transport {
            Some(t) => t,
            None => default_transport(self.timeout)?,
        };

        Ok(XtsClient {
            http: XtsHttp::new(&base_url, transport),
            credentials,
            client_id: self.client_id,
            session: Arc::new(RwLock::new(Session::default())),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    let transport = crate::http::ReqwestTransport::new(timeout)?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Configuration(
        "no transport configured (enable the `http` feature or call .transport())".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url_is_configuration_error() {
        let err = XtsClient::builder()
            .credentials("s", "a")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SdkError::Configuration(ref m) if m.contains("base url")));
    }

    #[test]
    fn test_blank_base_url_is_configuration_error() {
        let err = XtsClient::builder()
            .base_url("  ")
            .credentials("s", "a")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SdkError::Configuration(_)));
    }

    #[test]
    fn test_missing_credentials_is_configuration_error() {
        let err = XtsClient::builder()
            .base_url("https://xts.example.com")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SdkError::Configuration(ref m) if m.contains("credentials")));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_build_with_default_transport() {
        let client = XtsClient::builder()
            .base_url("https://xts.example.com/")
            .credentials("s", "a")
            .client_id("DEALER1")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://xts.example.com");
        assert_eq!(client.client_id(), "DEALER1");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_not_authenticated_before_login() {
        let client = XtsClient::builder()
            .base_url("https://xts.example.com")
            .credentials("s", "a")
            .build()
            .unwrap();
        let err = tokio_test::block_on(client.token()).unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::NotAuthenticated)));
    }
}
