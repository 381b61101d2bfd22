//! Authentication — credentials, session state, login/logout.
//!
//! ## Session Model
//!
//! - Login exchanges the app's secret/app key pair for an opaque session token.
//!   The token is stored inside the client and attached as the `authorization`
//!   header on every later call. It is never exposed through the public API.
//! - The login response also says whether the account is an investor or a
//!   dealer. That flag is recorded once, on the first successful login, and
//!   every later order/profile decision reads it rather than re-deriving it.
//! - Logout invalidates the token server-side only. The client keeps its copy;
//!   callers should treat a logged-out client as spent.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::AccountKind;

// ============================================================================
// Credentials
// ============================================================================

/// API key pair issued by the broker.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub(crate) secret_key: String,
    pub(crate) app_key: String,
}

impl Credentials {
    pub fn new(secret_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            app_key: app_key.into(),
        }
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_key", &"<redacted>")
            .field("app_key", &self.app_key)
            .finish()
    }
}

// ============================================================================
// Session state
// ============================================================================

/// Internal session state. Token is NEVER exposed.
#[derive(Debug, Clone, Default)]
pub(crate) struct Session {
    pub(crate) token: Option<String>,
    pub(crate) account_kind: Option<AccountKind>,
    pub(crate) user_id: Option<String>,
    pub(crate) logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Record a successful login.
    ///
    /// The account kind is only taken from the first login; a conflicting value
    /// from a later one is ignored and returned as `Err(kept)` so the caller can
    /// log it.
    pub(crate) fn record_login(
        &mut self,
        token: String,
        user_id: String,
        reported: AccountKind,
        at: DateTime<Utc>,
    ) -> Result<AccountKind, AccountKind> {
        self.token = Some(token);
        self.user_id = Some(user_id);
        self.logged_in_at = Some(at);
        match self.account_kind {
            None => {
                self.account_kind = Some(reported);
                Ok(reported)
            }
            Some(kept) if kept == reported => Ok(kept),
            Some(kept) => Err(kept),
        }
    }
}

/// Public summary of the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: String,
    pub account_kind: AccountKind,
    pub logged_in_at: DateTime<Utc>,
}

// ============================================================================
// Wire types
// ============================================================================

/// Login request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest<'a> {
    pub secret_key: &'a str,
    pub app_key: &'a str,
    pub source: &'a str,
}

/// Login `result` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResult {
    pub token: String,
    #[serde(rename = "userID", alias = "userId", default)]
    pub user_id: String,
    #[serde(rename = "isInvestorClient", default)]
    pub is_investor_client: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("s3cr3t", "app-1");
        let dbg = format!("{:?}", creds);
        assert!(!dbg.contains("s3cr3t"));
        assert!(dbg.contains("app-1"));
    }

    #[test]
    fn test_first_login_sets_account_kind() {
        let mut session = Session::default();
        let kind = session
            .record_login("t1".into(), "u1".into(), AccountKind::Investor, Utc::now())
            .unwrap();
        assert_eq!(kind, AccountKind::Investor);
        assert_eq!(session.token.as_deref(), Some("t1"));
    }

    #[test]
    fn test_account_kind_immutable_after_first_login() {
        let mut session = Session::default();
        session
            .record_login("t1".into(), "u1".into(), AccountKind::Dealer, Utc::now())
            .unwrap();
        let kept = session
            .record_login("t2".into(), "u1".into(), AccountKind::Investor, Utc::now())
            .unwrap_err();
        assert_eq!(kept, AccountKind::Dealer);
        assert_eq!(session.account_kind, Some(AccountKind::Dealer));
        // The fresh token still replaces the old one.
        assert_eq!(session.token.as_deref(), Some("t2"));
    }

    #[test]
    fn test_login_request_wire_names() {
        let req = LoginRequest {
            secret_key: "s",
            app_key: "a",
            source: "WebAPI",
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["secretKey"], "s");
        assert_eq!(json["appKey"], "a");
        assert_eq!(json["source"], "WebAPI");
    }

    #[test]
    fn test_login_result_decode() {
        let r: LoginResult = serde_json::from_str(
            r#"{"token":"abc","userID":"U1","isInvestorClient":true,"appVersion":"1"}"#,
        )
        .unwrap();
        assert_eq!(r.token, "abc");
        assert_eq!(r.user_id, "U1");
        assert!(r.is_investor_client);
    }
}
