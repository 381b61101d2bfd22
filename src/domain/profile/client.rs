//! Profile sub-client — profile and balance reads.

use crate::client::XtsClient;
use crate::domain::profile::{BalanceData, UserProfile};
use crate::error::{HttpError, SdkError};
use crate::http::TransportResponse;
use crate::network::PROFILE_PATH;
use crate::shared::decode_envelope;

pub struct Profile<'a> {
    pub(crate) client: &'a XtsClient,
}

impl<'a> Profile<'a> {
    /// Fetch the user profile. Dealer sessions name the client explicitly.
    pub async fn get(&self) -> Result<UserProfile, SdkError> {
        let (token, account_kind) = self.client.session_context().await?;

        let mut query = Vec::new();
        if account_kind.is_dealer() {
            query.push(("clientID", self.client.client_id.clone()));
        }

        let resp = self.client.http.get(PROFILE_PATH, &query, &token).await?;
        let resp = require_ok(resp)?;
        Ok(decode_envelope::<UserProfile>(&resp.body)?.into_result())
    }

    /// Fetch the account balance. Investor accounts only.
    ///
    /// Dealers see balances on the dealer terminal, not through the API, so a
    /// dealer session fails with [`SdkError::Permission`] without a request.
    pub async fn balance(&self) -> Result<BalanceData, SdkError> {
        let (token, account_kind) = self.client.session_context().await?;
        if account_kind.is_dealer() {
            return Err(SdkError::Permission(
                "balance is available to investor accounts only; dealers use the dealer terminal"
                    .to_string(),
            ));
        }

        let query = [("clientID", self.client.client_id.clone())];
        let resp = self.client.http.get(PROFILE_PATH, &query, &token).await?;
        let resp = require_ok(resp)?;
        Ok(decode_envelope::<BalanceData>(&resp.body)?.into_result())
    }
}

fn require_ok(resp: TransportResponse) -> Result<TransportResponse, HttpError> {
    if resp.is_ok() {
        Ok(resp)
    } else {
        Err(HttpError::UnexpectedStatus {
            status: resp.status,
            body: resp.body,
        })
    }
}
