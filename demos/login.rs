//! Log in, print the session summary, log out.
//!
//! Requires `XTS_BASE_URL`, `XTS_SECRET_KEY`, `XTS_APP_KEY` (and `XTS_CLIENT_ID`
//! for dealer accounts) in the environment or a `.env` file.
//!
//! Run: cargo run --example login

use tracing_subscriber::EnvFilter;
use xts_sdk::prelude::*;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,xts_sdk=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    init_logging();

    let client = XtsClientBuilder::from_env().build()?;
    let session = client.auth().login().await?;
    println!(
        "Logged in as {} ({}) at {}",
        session.user_id, session.account_kind, session.logged_in_at
    );

    client.auth().logout().await?;
    println!("Logged out");
    Ok(())
}
