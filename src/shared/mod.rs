//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod envelope;
pub mod serde_util;

pub use envelope::{decode_envelope, ResponseEnvelope};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AppOrderId ──────────────────────────────────────────────────────────────

/// Broker-assigned identifier of an accepted order.
///
/// Serializes as a JSON integer. Deserializes from either an integer or a float,
/// since the API has historically emitted the id as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppOrderId(u64);

impl AppOrderId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AppOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AppOrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for AppOrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(AppOrderId)
    }
}

impl Serialize for AppOrderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for AppOrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_util::whole_number_u64::deserialize(deserializer).map(AppOrderId)
    }
}

// ─── AccountKind ─────────────────────────────────────────────────────────────

/// Whether the session trades on behalf of clients or for itself.
///
/// Dealers must name the client on order, cancel and profile calls; for
/// investors the API infers identity from the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Dealer,
    Investor,
}

impl AccountKind {
    /// Map the login response's `isInvestorClient` flag.
    pub fn from_investor_flag(is_investor_client: bool) -> Self {
        if is_investor_client {
            Self::Investor
        } else {
            Self::Dealer
        }
    }

    pub fn is_dealer(&self) -> bool {
        matches!(self, Self::Dealer)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dealer => "dealer",
            Self::Investor => "investor",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_order_id_from_integer() {
        let id: AppOrderId = serde_json::from_str("1234567").unwrap();
        assert_eq!(id, AppOrderId::new(1234567));
    }

    #[test]
    fn test_app_order_id_from_float() {
        let id: AppOrderId = serde_json::from_str("1234567.0").unwrap();
        assert_eq!(id.get(), 1234567);
    }

    #[test]
    fn test_app_order_id_full_u64_range() {
        let id: AppOrderId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.get(), u64::MAX);
    }

    #[test]
    fn test_app_order_id_rejects_negative() {
        assert!(serde_json::from_str::<AppOrderId>("-5").is_err());
    }

    #[test]
    fn test_app_order_id_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&AppOrderId::new(42)).unwrap(), "42");
    }

    #[test]
    fn test_account_kind_from_flag() {
        assert_eq!(AccountKind::from_investor_flag(true), AccountKind::Investor);
        assert_eq!(AccountKind::from_investor_flag(false), AccountKind::Dealer);
        assert!(AccountKind::Dealer.is_dealer());
        assert_eq!(AccountKind::Investor.to_string(), "investor");
    }
}
