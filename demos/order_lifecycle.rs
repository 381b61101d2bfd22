//! Place a limit order, double its quantity, then cancel it.
//!
//! Places a REAL order. Point `XTS_BASE_URL` at a UAT environment.
//!
//! Run: cargo run --example order_lifecycle

use rust_decimal_macros::dec;
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
    client.auth().login().await?;
    let orders = client.orders();

    let builder = OrderBuilder::new()
        .exchange_segment(ExchangeSegment::NseCm)
        .exchange_instrument_id(2885)
        .product_type(ProductType::Mis)
        .order_type(OrderType::Limit)
        .buy()
        .order_quantity(1)
        .limit_price(dec!(100))
        .order_uid("demo-lifecycle");
    let mut order = orders.new_order(builder).await?;

    let id = orders.place(&mut order).await?;
    println!("Placed: {}", id);

    let params = ModificationParams::new().with_order_quantity(order.order_quantity * 2);
    let mut order = match orders.modify(&order, &params).await {
        Ok(modified) => {
            println!(
                "Modified: {} -> quantity {}",
                modified.app_order_id.map(|id| id.to_string()).unwrap_or_default(),
                modified.order_quantity
            );
            modified
        }
        Err(e) if e.is_rejection() => {
            println!("Modify rejected ({}); keeping the original", e);
            order
        }
        Err(e) => return Err(e),
    };

    orders.cancel(&mut order).await?;
    println!("Cancelled: status {:?}", order.status);

    client.auth().logout().await?;
    Ok(())
}
