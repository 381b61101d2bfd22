//! Print the user profile and, for investor accounts, the balance.
//!
//! Run: cargo run --example profile

use tracing_subscriber::EnvFilter;
use xts_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = XtsClientBuilder::from_env().build()?;
    let session = client.auth().login().await?;

    let profile = client.profile().get().await?;
    println!("{} <{}>", profile.client_name, profile.email_id);
    for bank in &profile.bank_accounts {
        println!("  bank: {} {} ({})", bank.bank_name, bank.account_number, bank.bank_ifsc_code);
    }
    for exchange in profile.enabled_exchanges() {
        println!("  segment {}: {}", exchange.exchange_seg_number, exchange.participant_code);
    }

    match client.profile().balance().await {
        Ok(balance) => {
            let pretty = serde_json::to_string_pretty(&balance)
                .map_err(|e| SdkError::Validation(e.to_string()))?;
            println!("Balance:\n{}", pretty);
        }
        Err(SdkError::Permission(reason)) => {
            println!("No balance for {} accounts: {}", session.account_kind, reason)
        }
        Err(e) => return Err(e),
    }

    client.auth().logout().await?;
    Ok(())
}
