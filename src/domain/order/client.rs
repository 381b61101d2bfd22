//! Orders sub-client — build, place, modify, cancel.
//!
//! Every call is a single attempt. If the future is dropped mid-flight the
//! broker may still have acted on the request; the order value is only updated
//! after a confirmed 200.

use crate::client::XtsClient;
use crate::domain::order::wire::{CancelAllRequest, OrderAck};
use crate::domain::order::{ExchangeSegment, ModificationParams, Order, OrderBuilder, OrderStatus};
use crate::error::{OrderOperation, SdkError};
use crate::network::{CANCEL_ALL_PATH, ORDERS_PATH};
use crate::shared::{decode_envelope, AppOrderId};

pub struct Orders<'a> {
    pub(crate) client: &'a XtsClient,
}

impl<'a> Orders<'a> {
    /// Build an order for the logged-in account.
    ///
    /// Dealer sessions stamp the configured client id on the order.
    pub async fn new_order(&self, builder: OrderBuilder) -> Result<Order, SdkError> {
        let (_, account_kind) = self.client.session_context().await?;
        builder.build(account_kind, &self.client.client_id)
    }

    /// Submit a new order.
    ///
    /// On success the broker's id is written into `order` and returned.
    ///
    /// A non-200 response still mutates `order`: its status becomes
    /// [`OrderStatus::Rejected`] and `app_order_id` stays `None`. This is the only
    /// error path that touches the order; validation, transport and decode
    /// failures leave it exactly as passed in.
    pub async fn place(&self, order: &mut Order) -> Result<AppOrderId, SdkError> {
        if let Some(id) = order.app_order_id {
            return Err(SdkError::Validation(format!("order already placed as {}", id)));
        }
        let token = self.client.token().await?;

        let resp = self.client.http.post(ORDERS_PATH, &*order, &token).await?;
        if !resp.is_ok() {
            tracing::warn!(
                status = resp.status,
                uid = %order.order_uid,
                "Order placement rejected"
            );
            order.status = OrderStatus::Rejected;
            return Err(rejected(OrderOperation::Place, resp.status));
        }

        let ack = decode_envelope::<OrderAck>(&resp.body)?.into_result();
        order.app_order_id = Some(ack.app_order_id);
        order.status = OrderStatus::Submitted;

        tracing::info!(app_order_id = %ack.app_order_id, uid = %order.order_uid, "Order placed");
        Ok(ack.app_order_id)
    }

    /// Modify a live order and return the resulting order.
    ///
    /// `original` is never changed. On success the returned order is `original`
    /// with the present params applied and the broker's new id; on any error
    /// nothing is merged.
    pub async fn modify(
        &self,
        original: &Order,
        params: &ModificationParams,
    ) -> Result<Order, SdkError> {
        let target = require_placed(original)?;
        if let Some(requested) = params.app_order_id {
            if requested != target {
                return Err(SdkError::Validation(format!(
                    "modification targets {} but the order is {}",
                    requested, target
                )));
            }
        }
        let token = self.client.token().await?;

        let body = params.clone().with_app_order_id(target);
        let resp = self.client.http.put(ORDERS_PATH, &body, &token).await?;
        if !resp.is_ok() {
            tracing::warn!(
                status = resp.status,
                app_order_id = %target,
                "Order modification rejected"
            );
            return Err(rejected(OrderOperation::Modify, resp.status));
        }

        let ack = decode_envelope::<OrderAck>(&resp.body)?.into_result();
        tracing::info!(
            app_order_id = %target,
            new_app_order_id = %ack.app_order_id,
            "Order modified"
        );
        Ok(params.apply_to(original, ack.app_order_id))
    }

    /// Cancel a live order.
    ///
    /// Dealer sessions identify the client with the order's client id (falling
    /// back to the configured one). On rejection the order is left untouched.
    pub async fn cancel(&self, order: &mut Order) -> Result<(), SdkError> {
        let app_order_id = require_placed(order)?;
        let client_id = order
            .client_id
            .clone()
            .unwrap_or_else(|| self.client.client_id.clone());

        self.cancel_by_id(app_order_id, &client_id).await?;
        order.status = OrderStatus::Cancelled;
        Ok(())
    }

    /// Cancel by broker id alone, for orders not held as an [`Order`] value.
    ///
    /// `client_id` is only sent for dealer sessions.
    pub async fn cancel_by_id(
        &self,
        app_order_id: AppOrderId,
        client_id: &str,
    ) -> Result<(), SdkError> {
        let (token, account_kind) = self.client.session_context().await?;

        let mut query = vec![("appOrderID", app_order_id.to_string())];
        if account_kind.is_dealer() {
            query.push(("clientID", client_id.to_string()));
        }

        let resp = self.client.http.delete(ORDERS_PATH, &query, &token).await?;
        if !resp.is_ok() {
            tracing::warn!(
                status = resp.status,
                app_order_id = %app_order_id,
                "Order cancellation rejected"
            );
            return Err(rejected(OrderOperation::Cancel, resp.status));
        }

        tracing::info!(app_order_id = %app_order_id, "Order cancelled");
        Ok(())
    }

    /// Cancel every open order on one instrument.
    pub async fn cancel_all(
        &self,
        exchange_segment: ExchangeSegment,
        exchange_instrument_id: i64,
    ) -> Result<(), SdkError> {
        let token = self.client.token().await?;
        let request = CancelAllRequest {
            exchange_segment,
            exchange_instrument_id,
        };

        let resp = self.client.http.post(CANCEL_ALL_PATH, &request, &token).await?;
        if !resp.is_ok() {
            tracing::warn!(
                status = resp.status,
                segment = %exchange_segment,
                instrument = exchange_instrument_id,
                "Cancel-all rejected"
            );
            return Err(rejected(OrderOperation::CancelAll, resp.status));
        }

        tracing::info!(
            segment = %exchange_segment,
            instrument = exchange_instrument_id,
            "All orders cancelled"
        );
        Ok(())
    }
}

fn require_placed(order: &Order) -> Result<AppOrderId, SdkError> {
    order.app_order_id.ok_or_else(|| {
        SdkError::Validation("order has no appOrderID; place it first".to_string())
    })
}

fn rejected(operation: OrderOperation, status: u16) -> SdkError {
    SdkError::OrderRejected { operation, status }
}
