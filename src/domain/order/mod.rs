//! Order domain — order entity, exchange enumerations, lifecycle.

pub mod builder;
pub mod client;
pub mod modify;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::AppOrderId;

pub use builder::OrderBuilder;
pub use modify::ModificationParams;

/// Error returned when parsing an exchange enumeration from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl std::fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

/// Declares a wire-string enum with `as_str`, `Display` and `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:tt { $($variant:ident => $wire:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError { kind: $kind, value: s.to_string() }),
                }
            }
        }
    };
}

// ─── Exchange enumerations ───────────────────────────────────────────────────

wire_enum! {
    /// Market an instrument trades on.
    ExchangeSegment, "exchange segment" {
        NseCm => "NSECM",
        NseFo => "NSEFO",
        NseCd => "NSECD",
        BseCm => "BSECM",
        BseFo => "BSEFO",
        McxFo => "MCXFO",
    }
}

wire_enum! {
    ProductType, "product type" {
        Mis => "MIS",
        Nrml => "NRML",
        Cnc => "CNC",
        CoverOrder => "CO",
        BracketOrder => "BO",
    }
}

wire_enum! {
    OrderType, "order type" {
        Limit => "LIMIT",
        Market => "MARKET",
        StopLimit => "STOPLIMIT",
        StopMarket => "STOPMARKET",
    }
}

wire_enum! {
    OrderSide, "order side" {
        Buy => "BUY",
        Sell => "SELL",
    }
}

wire_enum! {
    TimeInForce, "time in force" {
        Day => "DAY",
        Ioc => "IOC",
        Gtd => "GTD",
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Client-side lifecycle of an order, as far as this SDK can observe it.
///
/// `Created → Submitted → Modified* → Cancelled | Rejected`. Fills happen on the
/// exchange and are not tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Created,
    Submitted,
    Modified,
    Cancelled,
    Rejected,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An exchange order, serialized in the API's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Dealer accounts only; investors are identified by the session token.
    #[serde(rename = "clientID", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Caller-supplied reference tag.
    #[serde(rename = "orderUID", default)]
    pub order_uid: String,
    pub exchange_segment: ExchangeSegment,
    #[serde(rename = "exchangeInstrumentID")]
    pub exchange_instrument_id: i64,
    pub product_type: ProductType,
    pub order_type: OrderType,
    pub order_side: OrderSide,
    pub time_in_force: TimeInForce,
    #[serde(with = "rust_decimal::serde::float")]
    pub limit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub stop_price: Decimal,
    #[serde(deserialize_with = "crate::shared::serde_util::whole_number::deserialize")]
    pub order_quantity: i64,
    #[serde(deserialize_with = "crate::shared::serde_util::whole_number::deserialize")]
    pub disclosed_quantity: i64,
    /// Assigned by a successful placement; `None` until then.
    #[serde(rename = "appOrderID", default, skip_serializing_if = "Option::is_none")]
    pub app_order_id: Option<AppOrderId>,
    #[serde(skip)]
    pub status: OrderStatus,
}

impl Order {
    /// Whether the remote has accepted this order.
    pub fn is_placed(&self) -> bool {
        self.app_order_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_enum_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ExchangeSegment::NseFo).unwrap(),
            r#""NSEFO""#
        );
        assert_eq!(
            serde_json::from_str::<ProductType>(r#""CO""#).unwrap(),
            ProductType::CoverOrder
        );
        assert_eq!(OrderType::StopLimit.to_string(), "STOPLIMIT");
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!(OrderSide::from_str("SELL").unwrap(), OrderSide::Sell);
        let err = TimeInForce::from_str("GTC").unwrap_err();
        assert_eq!(err.to_string(), "invalid time in force: GTC");
    }

    #[test]
    fn test_order_status_defaults_to_created() {
        assert_eq!(OrderStatus::default(), OrderStatus::Created);
    }
}
