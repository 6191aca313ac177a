use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;

use scheduler_driver::cli::Cli;
use scheduler_driver::config::DriverConfig;
use scheduler_driver::cycle::run_loop;
use scheduler_driver::demo::JsonFileCollaborator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DriverConfig::from_env();

    let snapshot_path = cli
        .snapshot
        .map(|p| p.to_string_lossy().into_owned())
        .or_else(|| std::env::var("SCHEDULER_SNAPSHOT_PATH").ok())
        .context("no snapshot source: pass --snapshot or set SCHEDULER_SNAPSHOT_PATH")?;

    info!(
        "{} launching in namespace {}, reading snapshots from {}...",
        config.scheduler_name, config.namespace, snapshot_path
    );

    let collaborator = Arc::new(JsonFileCollaborator::new(snapshot_path));
    run_loop(config, collaborator.clone(), collaborator, cli.once).await;

    Ok(())
}
