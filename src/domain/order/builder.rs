//! Fluent builder for creating orders.

use rust_decimal::Decimal;

use crate::domain::order::{
    ExchangeSegment, Order, OrderSide, OrderStatus, OrderType, ProductType, TimeInForce,
};
use crate::error::SdkError;
use crate::shared::AccountKind;

/// Builder for creating orders with a fluent API.
///
/// Construction is pure: nothing is sent and prices/quantities are not range
/// checked. The broker is the authority on what it accepts.
///
/// # Example
///
/// ```rust,ignore
/// use xts_sdk::prelude::*;
///
/// let order = OrderBuilder::new()
///     .exchange_segment(ExchangeSegment::NseCm)
///     .exchange_instrument_id(2885)
///     .product_type(ProductType::Mis)
///     .order_type(OrderType::Limit)
///     .buy()
///     .order_quantity(10)
///     .limit_price(dec!(2450.5))
///     .order_uid("strat-1-0001")
///     .build(AccountKind::Dealer, "DEALER01")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    exchange_segment: Option<ExchangeSegment>,
    exchange_instrument_id: Option<i64>,
    product_type: Option<ProductType>,
    order_type: Option<OrderType>,
    order_side: Option<OrderSide>,
    time_in_force: Option<TimeInForce>,
    order_quantity: Option<i64>,
    disclosed_quantity: i64,
    limit_price: Decimal,
    stop_price: Decimal,
    order_uid: String,
}

impl OrderBuilder {
    /// Create a new order builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exchange segment (required).
    pub fn exchange_segment(mut self, segment: ExchangeSegment) -> Self {
        self.exchange_segment = Some(segment);
        self
    }

    /// Set the instrument (required).
    pub fn exchange_instrument_id(mut self, id: i64) -> Self {
        self.exchange_instrument_id = Some(id);
        self
    }

    /// Set the product type (required).
    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    /// Set the order type (required).
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    pub fn buy(mut self) -> Self {
        self.order_side = Some(OrderSide::Buy);
        self
    }

    pub fn sell(mut self) -> Self {
        self.order_side = Some(OrderSide::Sell);
        self
    }

    /// Set the side directly.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.order_side = Some(side);
        self
    }

    /// Defaults to [`TimeInForce::Day`].
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the quantity (required).
    pub fn order_quantity(mut self, quantity: i64) -> Self {
        self.order_quantity = Some(quantity);
        self
    }

    pub fn disclosed_quantity(mut self, quantity: i64) -> Self {
        self.disclosed_quantity = quantity;
        self
    }

    pub fn limit_price(mut self, price: Decimal) -> Self {
        self.limit_price = price;
        self
    }

    pub fn stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = price;
        self
    }

    /// Caller-side reference tag echoed back by the broker.
    pub fn order_uid(mut self, uid: impl Into<String>) -> Self {
        self.order_uid = uid.into();
        self
    }

    /// Build the order for the given account kind.
    ///
    /// Dealer orders carry `client_id`; investor orders leave it unset.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Validation`] if a required field is missing.
    pub fn build(self, account_kind: AccountKind, client_id: &str) -> Result<Order, SdkError> {
        let client_id = match account_kind {
            AccountKind::Dealer => Some(client_id.to_string()),
            AccountKind::Investor => None,
        };

        Ok(Order {
            client_id,
            order_uid: self.order_uid,
            exchange_segment: required(self.exchange_segment, "exchange_segment")?,
            exchange_instrument_id: required(
                self.exchange_instrument_id,
                "exchange_instrument_id",
            )?,
            product_type: required(self.product_type, "product_type")?,
            order_type: required(self.order_type, "order_type")?,
            order_side: required(self.order_side, "order_side (call .buy() or .sell())")?,
            time_in_force: self.time_in_force.unwrap_or(TimeInForce::Day),
            limit_price: self.limit_price,
            stop_price: self.stop_price,
            order_quantity: required(self.order_quantity, "order_quantity")?,
            disclosed_quantity: self.disclosed_quantity,
            app_order_id: None,
            status: OrderStatus::Created,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, SdkError> {
    value.ok_or_else(|| SdkError::Validation(format!("{} is required", field)))
}
