//! HTTP layer — transport seam plus the low-level `XtsHttp` client.

pub mod client;
pub mod transport;

pub use client::XtsHttp;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Method, Transport, TransportRequest, TransportResponse};
