//! Sparse order modification and the merge that applies it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::order::{Order, OrderStatus, OrderType, ProductType, TimeInForce};
use crate::error::SdkError;
use crate::shared::serde_util::{decimal_option, whole_number_option};
use crate::shared::AppOrderId;

/// Fields a caller wants changed on a live order. `None` means "leave as is".
///
/// Serializes to the modify endpoint's body, omitting absent fields. Unknown
/// keys are refused when decoding, so a typo never reaches the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ModificationParams {
    /// Target order; filled from the original order when left unset.
    #[serde(rename = "appOrderID", skip_serializing_if = "Option::is_none")]
    pub app_order_id: Option<AppOrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time_in_force: Option<TimeInForce>,
    #[serde(rename = "modifiedOrderUID", skip_serializing_if = "Option::is_none")]
    pub modified_order_uid: Option<String>,
    #[serde(
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "decimal_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_limit_price: Option<Decimal>,
    #[serde(
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "decimal_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_stop_price: Option<Decimal>,
    #[serde(
        deserialize_with = "whole_number_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_order_quantity: Option<i64>,
    #[serde(
        deserialize_with = "whole_number_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_disclosed_quantity: Option<i64>,
}

impl ModificationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an untyped field map, e.g. `{"modifiedOrderQuantity": 100}`.
    ///
    /// Quantities given as floats are truncated. Any key outside the
    /// modification table fails the whole conversion.
    pub fn from_fields(fields: serde_json::Map<String, Value>) -> Result<Self, SdkError> {
        Self::try_from(Value::Object(fields))
    }

    pub fn with_app_order_id(mut self, id: AppOrderId) -> Self {
        self.app_order_id = Some(id);
        self
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.modified_product_type = Some(product_type);
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.modified_order_type = Some(order_type);
        self
    }

    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.modified_time_in_force = Some(tif);
        self
    }

    pub fn with_order_uid(mut self, uid: impl Into<String>) -> Self {
        self.modified_order_uid = Some(uid.into());
        self
    }

    pub fn with_limit_price(mut self, price: Decimal) -> Self {
        self.modified_limit_price = Some(price);
        self
    }

    pub fn with_stop_price(mut self, price: Decimal) -> Self {
        self.modified_stop_price = Some(price);
        self
    }

    pub fn with_order_quantity(mut self, quantity: i64) -> Self {
        self.modified_order_quantity = Some(quantity);
        self
    }

    pub fn with_disclosed_quantity(mut self, quantity: i64) -> Self {
        self.modified_disclosed_quantity = Some(quantity);
        self
    }

    /// True when no order field would change.
    pub fn is_empty(&self) -> bool {
        self.modified_product_type.is_none()
            && self.modified_order_type.is_none()
            && self.modified_time_in_force.is_none()
            && self.modified_order_uid.is_none()
            && self.modified_limit_price.is_none()
            && self.modified_stop_price.is_none()
            && self.modified_order_quantity.is_none()
            && self.modified_disclosed_quantity.is_none()
    }

    /// Produce the modified order: a copy of `original` with every present field
    /// replaced and the server-confirmed id installed. `original` is untouched.
    pub fn apply_to(&self, original: &Order, app_order_id: AppOrderId) -> Order {
        let mut order = original.clone();

        if let Some(product_type) = self.modified_product_type {
            order.product_type = product_type;
        }
        if let Some(order_type) = self.modified_order_type {
            order.order_type = order_type;
        }
        if let Some(tif) = self.modified_time_in_force {
            order.time_in_force = tif;
        }
        if let Some(uid) = &self.modified_order_uid {
            order.order_uid = uid.clone();
        }
        if let Some(price) = self.modified_limit_price {
            order.limit_price = price;
        }
        if let Some(price) = self.modified_stop_price {
            order.stop_price = price;
        }
        if let Some(quantity) = self.modified_order_quantity {
            order.order_quantity = quantity;
        }
        if let Some(quantity) = self.modified_disclosed_quantity {
            order.disclosed_quantity = quantity;
        }

        order.app_order_id = Some(app_order_id);
        order.status = OrderStatus::Modified;
        order
    }
}

impl TryFrom<Value> for ModificationParams {
    type Error = SdkError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
            .map_err(|e| SdkError::Validation(format!("invalid field modifier: {}", e)))
    }
}
