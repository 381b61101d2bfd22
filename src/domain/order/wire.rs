//! Wire types for the order endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::order::ExchangeSegment;
use crate::shared::AppOrderId;

/// `result` of a place or modify call.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OrderAck {
    #[serde(rename = "AppOrderID", alias = "appOrderID")]
    pub app_order_id: AppOrderId,
    #[serde(rename = "OrderUniqueIdentifier", alias = "orderUID", default)]
    pub order_uid: Option<String>,
    #[serde(rename = "ClientID", alias = "clientID", default)]
    pub client_id: Option<String>,
}

/// Body of `POST /interactive/orders/cancelall`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllRequest {
    pub exchange_segment: ExchangeSegment,
    #[serde(rename = "exchangeInstrumentID")]
    pub exchange_instrument_id: i64,
}
