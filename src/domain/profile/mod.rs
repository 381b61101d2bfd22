//! Profile domain — user identity, bank details, exchange registrations, balance.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::serde_util;

/// Balance payload for investor accounts, passed through untyped.
///
/// The shape varies by broker configuration (cash, margins, limits per
/// segment), so the SDK does not impose one.
pub type BalanceData = serde_json::Map<String, serde_json::Value>;

/// The logged-in user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserProfile {
    #[serde(alias = "ClientID")]
    pub client_id: String,
    pub client_name: String,
    #[serde(alias = "EmailID")]
    pub email_id: String,
    pub mobile_no: String,
    #[serde(rename = "PAN")]
    pub pan: String,
    pub residential_address: String,
    #[serde(
        rename = "ClientBankInfoList",
        deserialize_with = "serde_util::one_or_many::deserialize"
    )]
    pub bank_accounts: Vec<ClientBankInfo>,
    #[serde(
        rename = "ClientExchangeDetailsList",
        deserialize_with = "serde_util::one_or_many::deserialize"
    )]
    pub exchanges: Vec<ClientExchangeDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientBankInfo {
    pub account_number: String,
    pub account_type: String,
    pub bank_name: String,
    pub bank_branch_name: String,
    pub bank_city: String,
    pub customer_id: String,
    pub bank_city_pincode: String,
    #[serde(rename = "BankIFSCCode")]
    pub bank_ifsc_code: String,
}

/// Participant registration on one exchange segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientExchangeDetails {
    pub participant_code: String,
    pub exchange_seg_number: i64,
    pub enabled: bool,
}

impl UserProfile {
    /// Exchange registrations that are currently enabled.
    pub fn enabled_exchanges(&self) -> impl Iterator<Item = &ClientExchangeDetails> {
        self.exchanges.iter().filter(|e| e.enabled)
    }
}
