//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use xts_sdk::prelude::*;

pub const BASE_URL: &str = "https://xts.example.com";
pub const CLIENT_ID: &str = "DEALER01";

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, HttpError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, status: u16, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(HttpError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Transport("no scripted response".to_string())))
    }
}

/// `{type: "success", result}` envelope.
pub fn success(result: Value) -> Value {
    json!({
        "type": "success",
        "code": "s-0001",
        "description": "ok",
        "result": result,
    })
}

pub fn failure(description: &str) -> Value {
    json!({
        "type": "error",
        "code": "e-0001",
        "description": description,
        "result": {},
    })
}

pub fn login_body(token: &str, is_investor: bool) -> Value {
    success(json!({
        "token": token,
        "userID": "USER01",
        "isInvestorClient": is_investor,
    }))
}

pub fn order_ack(app_order_id: u64) -> Value {
    success(json!({
        "AppOrderID": app_order_id,
        "OrderUniqueIdentifier": "",
        "ClientID": CLIENT_ID,
    }))
}

pub fn client_with(transport: Arc<MockTransport>) -> XtsClient {
    XtsClient::builder()
        .base_url(BASE_URL)
        .credentials("secret", "app-key")
        .client_id(CLIENT_ID)
        .transport(transport)
        .build()
        .unwrap()
}

/// Client already logged in as the given account kind. The login request is
/// still recorded on the transport.
pub async fn logged_in(kind: AccountKind) -> (XtsClient, Arc<MockTransport>) {
    let transport = MockTransport::new();
    transport.push(200, login_body("tok-1", kind == AccountKind::Investor));
    let client = client_with(transport.clone());
    client.auth().login().await.unwrap();
    (client, transport)
}

/// Parse a recorded request body as JSON.
pub fn body_json(request: &TransportRequest) -> Value {
    serde_json::from_str(request.body.as_deref().unwrap_or("null")).unwrap()
}

pub fn limit_buy(quantity: i64) -> OrderBuilder {
    OrderBuilder::new()
        .exchange_segment(ExchangeSegment::NseCm)
        .exchange_instrument_id(2885)
        .product_type(ProductType::Mis)
        .order_type(OrderType::Limit)
        .buy()
        .order_quantity(quantity)
        .limit_price(rust_decimal_macros::dec!(101.25))
        .order_uid("tag-1")
}
