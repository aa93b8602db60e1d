//! Shoal: publish orchestrator for decentralized data-marketplace assets.
//!
//! # Usage
//!
//! ```bash
//! shoal --endpoint "Mumbai=https://rpc-mumbai.example" \
//!       --endpoint "Polygon=https://polygon-rpc.example" \
//!       --gateway https://gateway.example \
//!       --mode auto
//! ```
//!
//! Environment variables can also be used:
//! - `SHOAL_ENDPOINTS`: Comma-separated LABEL=URL candidates
//! - `SHOAL_PRIVATE_KEY`: Publisher private key
//! - `SHOAL_GATEWAY`: Marketplace gateway base URL
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use shoal::account::Account;
use shoal::chain::rpc::{HttpConnector, RpcTimeouts};
use shoal::config::Config;
use shoal::marketplace::{AssetPublisher, GatewayPublisher};
use shoal::model::PublishReport;
use shoal::observability::tracing::init_tracing;
use shoal::orchestrator::{Orchestrator, Settings};
use shoal::output;

/// Print startup banner with version and configuration.
fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        r#"
  Shoal v{} - Data Marketplace Publisher

  Configuration:
    Endpoints:  {} candidate(s)
    Mode:       {}
    Gateway:    {}
    Report:     {}
"#,
        version,
        config.endpoints.len(),
        config.mode,
        config.gateway.as_deref().unwrap_or("(none)"),
        config.output.display()
    );
}

/// Console summary of what was published; presentation only.
fn print_summary(report: &PublishReport) {
    println!("Publish run complete ({} mode)", report.mode);
    println!("  Publisher: {}", report.publisher);
    println!("  Network:   {}", report.network);
    println!("  Assets:    {}", report.assets.len());
    for asset in &report.assets {
        println!("\n  {} ({:?})", asset.metadata.name, asset.kind);
        println!("    DID:       {}", asset.did);
        println!("    Data NFT:  {}", asset.data_nft);
        println!("    Datatoken: {}", asset.datatoken);
        println!(
            "    Price:     {}",
            asset.price.as_deref().unwrap_or("Free")
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse configuration from CLI arguments and environment
    let config = Config::parse_args();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    // Print startup banner
    print_banner(&config);

    let account =
        Account::from_private_key(&config.private_key).context("invalid publisher private key")?;
    tracing::info!(publisher = %account.address(), "Publisher account derived");

    let descriptors = config.load_descriptors()?;

    let timeouts = RpcTimeouts {
        connect: Duration::from_secs(config.connect_timeout_secs),
        request: Duration::from_secs(config.request_timeout_secs),
    };
    let connector = Arc::new(HttpConnector::new(timeouts));
    let publisher = match &config.gateway {
        Some(url) => Some(
            Arc::new(GatewayPublisher::new(url, timeouts.request)?) as Arc<dyn AssetPublisher>
        ),
        None => None,
    };

    let settings = Settings {
        endpoints: config.endpoints.clone(),
        mode: config.mode,
        min_balance_wei: config.min_balance_wei,
        descriptors,
    };
    let orchestrator = Orchestrator::new(settings, account, connector, publisher);

    let report = orchestrator.run().await;
    tracing::info!(
        mode = %report.mode,
        network = %report.network,
        assets = report.assets.len(),
        "Publish run finished"
    );

    output::write_report(&report, &config.output)?;
    output::write_integration_template(&report, &config.template_output)?;

    print_summary(&report);
    Ok(())
}
