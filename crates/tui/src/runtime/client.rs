//! ISM client creation.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).

use anyhow::{Context, Result};
use ism_client::{IsmClient, MetricsCollector};
use ism_config::Config;

/// Build the client the side effects share.
pub fn create_client(config: &Config) -> Result<IsmClient> {
    let client = IsmClient::builder()
        .from_config(config)
        .metrics(MetricsCollector::new())
        .build()
        .context("failed to build ISM client")?;
    tracing::info!(base_url = %client.base_url(), "ISM client ready");
    Ok(client)
}
