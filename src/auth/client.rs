//! Auth sub-client — login, logout, session inspection.

use chrono::Utc;

use crate::auth::{LoginRequest, LoginResult, SessionInfo};
use crate::client::XtsClient;
use crate::error::{AuthError, SdkError};
use crate::network::{LOGIN_SOURCE, SESSION_PATH};
use crate::shared::{decode_envelope, AccountKind};

/// Sub-client for session operations.
pub struct Auth<'a> {
    pub(crate) client: &'a XtsClient,
}

impl<'a> Auth<'a> {
    /// Open a session with the configured credentials.
    ///
    /// Stores the token and, on the first login, the account kind. A non-200
    /// status or an unreadable response is [`AuthError::LoginFailed`]; a
    /// transport failure surfaces as [`SdkError::Http`].
    pub async fn login(&self) -> Result<SessionInfo, SdkError> {
        let creds = &self.client.credentials;
        let request = LoginRequest {
            secret_key: &creds.secret_key,
            app_key: &creds.app_key,
            source: LOGIN_SOURCE,
        };

        let resp = self.client.http.post_public(SESSION_PATH, &request).await?;
        if !resp.is_ok() {
            tracing::warn!(status = resp.status, "XTS login rejected");
            return Err(AuthError::LoginFailed(format!("status {}", resp.status)).into());
        }

        let result = decode_envelope::<LoginResult>(&resp.body)
            .map_err(|e| AuthError::LoginFailed(e.to_string()))?
            .into_result();
        if result.token.is_empty() {
            return Err(AuthError::LoginFailed("empty session token".to_string()).into());
        }

        let reported = AccountKind::from_investor_flag(result.is_investor_client);
        let now = Utc::now();
        let account_kind = {
            let mut session = self.client.session.write().await;
            match session.record_login(result.token, result.user_id.clone(), reported, now) {
                Ok(kind) => kind,
                Err(kept) => {
                    tracing::warn!(
                        kept = %kept,
                        reported = %reported,
                        "Login reported a different account kind; keeping the original"
                    );
                    kept
                }
            }
        };

        tracing::info!(
            user_id = %result.user_id,
            account_kind = %account_kind,
            "XTS session opened"
        );

        Ok(SessionInfo {
            user_id: result.user_id,
            account_kind,
            logged_in_at: now,
        })
    }

    /// Close the session server-side.
    ///
    /// The in-memory token is kept; the client should not be reused afterwards.
    pub async fn logout(&self) -> Result<(), SdkError> {
        let token = self.client.token().await?;
        let resp = self.client.http.delete(SESSION_PATH, &[], &token).await?;
        if !resp.is_ok() {
            tracing::warn!(status = resp.status, "XTS logout rejected");
            return Err(AuthError::LogoutFailed { status: resp.status }.into());
        }
        tracing::info!("XTS session closed");
        Ok(())
    }

    /// Account kind recorded by the first successful login.
    pub async fn account_kind(&self) -> Option<AccountKind> {
        self.client.session.read().await.account_kind
    }

    /// Whether a session token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.client.session.read().await.token.is_some()
    }

    pub async fn user_id(&self) -> Option<String> {
        self.client.session.read().await.user_id.clone()
    }

    /// Summary of the current session, if logged in.
    pub async fn session_info(&self) -> Option<SessionInfo> {
        let session = self.client.session.read().await;
        match (&session.user_id, session.account_kind, session.logged_in_at) {
            (Some(user_id), Some(account_kind), Some(logged_in_at)) => Some(SessionInfo {
                user_id: user_id.clone(),
                account_kind,
                logged_in_at,
            }),
            _ => None,
        }
    }
}
