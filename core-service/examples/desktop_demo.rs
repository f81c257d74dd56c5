//! Desktop demo: the facade over the seeded catalog with desktop host services.
//!
//! Run with `cargo run -p core-service --example desktop_demo`.

use core_runtime::{LatencyConfig, SdkConfig};
use core_service::bootstrap_desktop;
use std::time::Duration;

#[core_async::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SdkConfig::builder()
        .log_tag("DesktopDemo")
        .latency(LatencyConfig::uniform(Duration::from_millis(50)))
        .build()?;
    let sdk = bootstrap_desktop(config);
    sdk.initialize();

    let (does, mid_range) = core_async::join!(
        sdk.search_users("doe"),
        sdk.get_products_by_price_range(100.0, 300.0)
    );

    for user in does? {
        println!("user {}: {}", user.id, user.name);
    }
    for product in mid_range? {
        println!("product {}: {} ({:.2})", product.id, product.title, product.price);
    }

    sdk.navigate_to_product_details("1");
    sdk.navigate_back();
    sdk.show_message("Demo finished");
    println!("{}", sdk.get_platform_info());

    Ok(())
}
