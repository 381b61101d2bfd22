//! # XTS SDK
//!
//! A Rust client for the XTS interactive order-management REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, the response envelope, order and profile models
//! 2. **Auth** — Credentials, login/logout, the session (token + account kind)
//! 3. **HTTP** — `XtsHttp` over a pluggable [`http::Transport`] (reqwest by default)
//! 4. **High-Level Client** — `XtsClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use xts_sdk::prelude::*;
//!
//! let client = XtsClient::builder()
//!     .base_url("https://xts.example.com")
//!     .credentials("secret", "app-key")
//!     .client_id("DEALER1")
//!     .build()?;
//!
//! client.auth().login().await?;
//!
//! let builder = OrderBuilder::new()
//!     .exchange_segment(ExchangeSegment::NseCm)
//!     .exchange_instrument_id(2885)
//!     .product_type(ProductType::Mis)
//!     .order_type(OrderType::Limit)
//!     .buy()
//!     .order_quantity(50)
//!     .limit_price(dec!(101.25));
//! let mut order = client.orders().new_order(builder).await?;
//! let id = client.orders().place(&mut order).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and the response envelope.
pub mod shared;

/// Domain modules (vertical slices): order, profile.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Endpoint paths and environment variable names.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, session state, login/logout.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP plumbing and the transport seam.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `XtsClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AccountKind, AppOrderId, ResponseEnvelope};

    // Domain types — order
    pub use crate::domain::order::{
        ExchangeSegment, ModificationParams, Order, OrderBuilder, OrderSide, OrderStatus,
        OrderType, ProductType, TimeInForce,
    };

    // Domain types — profile
    pub use crate::domain::profile::{
        BalanceData, ClientBankInfo, ClientExchangeDetails, UserProfile,
    };

    // Errors
    pub use crate::error::{AuthError, HttpError, OrderOperation, SdkError, SdkResult};

    // Auth
    pub use crate::auth::{Credentials, SessionInfo};

    // Transport seam
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::http::{Method, Transport, TransportRequest, TransportResponse};

    // Client + sub-clients
    pub use crate::client::{AuthClient, OrdersClient, ProfileClient, XtsClient, XtsClientBuilder};
}
