//! Bobochic Orders
//!
//! Logs into the supplier portal with the configured credentials and prints
//! the current orders as JSON on stdout.

use anyhow::{Context, Result};
use bobochic_order_client::OrderClient;
use bobochic_utils::{init_logging, AppConfig, PortalError};
use tracing::info;

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(&config.logging)?;
    info!("Starting Bobochic order export");

    let credentials = config.credentials.as_ref().ok_or_else(|| {
        PortalError::configuration(
            "Missing credentials, set BOBOCHIC__CREDENTIALS__EMAIL and BOBOCHIC__CREDENTIALS__PASSWORD",
        )
    })?;

    let client = OrderClient::connect(&config.portal, &credentials.email, &credentials.password)
        .context("Failed to open supplier portal session")?;

    let orders = client.fetch_orders().context("Failed to fetch orders")?;
    println!("{}", serde_json::to_string_pretty(&orders)?);

    Ok(())
}
