//! Endpoint paths and environment keys for the XTS interactive API.

/// Session login (POST) and logout (DELETE).
pub const SESSION_PATH: &str = "/interactive/user/session";

/// User profile; also carries the balance for investor accounts.
pub const PROFILE_PATH: &str = "/interactive/user/profile";

/// Place (POST), modify (PUT) and cancel (DELETE) orders.
pub const ORDERS_PATH: &str = "/interactive/orders";

/// Bulk cancel scoped to one segment and instrument.
pub const CANCEL_ALL_PATH: &str = "/interactive/orders/cancelall";

/// Source tag the API expects on login.
pub const LOGIN_SOURCE: &str = "WebAPI";

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "XTS_BASE_URL";

/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "XTS_SECRET_KEY";

/// Environment variable holding the app key.
pub const ENV_APP_KEY: &str = "XTS_APP_KEY";

/// Environment variable holding the dealer client id.
pub const ENV_CLIENT_ID: &str = "XTS_CLIENT_ID";
