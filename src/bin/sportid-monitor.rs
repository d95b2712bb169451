// ABOUTME: Long-running monitor that pushes SportID workout totals to Datadog
// ABOUTME: Loads configuration, wires the pipeline, and runs the refresh scheduler until interrupted
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # `SportID` Monitor Binary
//!
//! Polls the `SportID` workout overview every `INTERVAL` seconds and forwards
//! each person's distance and points to Datadog. Exits with status 0 on Ctrl+C
//! or SIGTERM, and non-zero when configuration is missing or invalid.

use anyhow::{bail, Result};
use clap::Parser;
use sportid_monitor::{
    config::{load_dotenv, MonitorConfig},
    datadog::DatadogClient,
    logging,
    pipeline::Pipeline,
    scheduler::Scheduler,
    shutdown::ShutdownSignal,
    sportid::SportIdClient,
    utils::http_client,
};
use tracing::{error, info};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "sportid-monitor")]
#[command(about = "Forward SportID workout stats to Datadog as gauges")]
pub struct Args {
    /// Run a single refresh cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env must be applied before logging reads RUST_LOG and LOG_FORMAT
    let env_file = load_dotenv();
    logging::init_from_env()?;
    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }

    let config = match MonitorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    info!("{}", config.summary());

    let http = http_client::create_client()?;
    let pipeline = Pipeline::new(
        SportIdClient::new((&config).into(), http.clone()),
        DatadogClient::new((&config).into(), http),
        config.host.clone(),
    );

    let mut scheduler = Scheduler::new(config.interval_secs, config.run_on_start);

    if args.once {
        if !scheduler.run_once(&pipeline).await {
            bail!("Refresh cycle failed");
        }
        return Ok(());
    }

    // Signal handlers must exist before the first cycle starts
    let shutdown = ShutdownSignal::install()?;
    let summary = scheduler.run(&pipeline, shutdown.wait()).await;
    info!(
        "Stopped after {} cycles ({} succeeded, {} failed)",
        summary.cycles_run, summary.cycles_succeeded, summary.cycles_failed
    );
    Ok(())
}
