// SPDX-License-Identifier: GPL-3.0-only

//! cdrom-manager - keeps a live view of the optical drive and mounts,
//! opens or unmounts its media through UDisks2.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use cdrom_engine::{Engine, IntervalTicker, Request};
use cdrom_types::DeviceId;
use cdrom_udisks::{DiskManager, UdisksDiskService};
use clap::Parser;
use futures_util::StreamExt;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

mod config;
mod input;
mod launcher;
mod logging;
mod view;

use config::{Config, LoggingLevel};
use launcher::DesktopLauncher;
use view::{ControlsView, TerminalView};

#[derive(Debug, Parser)]
#[command(name = "cdrom-manager", version, about = "Mount and open the optical drive")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/cdrom-manager/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, value_enum)]
    log_level: Option<LoggingLevel>,

    /// Run a single pass, print the drive view and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let (mut config, config_error) = match Config::load_from(&config_path) {
        Ok(loaded) => (loaded.unwrap_or_default(), None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    logging::init(&config);
    info!("Starting cdrom-manager v{}", env!("CARGO_PKG_VERSION"));
    match config_error {
        Some(e) => warn!("Using default settings: {e}"),
        None => debug!("Settings from {}: {config:?}", config_path.display()),
    }

    let manager = match DiskManager::new().await {
        Ok(manager) => manager,
        Err(e) => {
            error!("Cannot reach UDisks2: {e}");
            return Err(e).context("failed to connect to the UDisks2 service");
        }
    };

    let device = DeviceId::optical();
    let (latest_tx, latest_rx) = watch::channel(None);
    let view = TerminalView::new(device.clone(), std::io::stdout(), latest_tx);
    let service = Arc::new(UdisksDiskService::new(manager.clone()));
    let mut engine = Engine::new(service, device.clone(), view, DesktopLauncher);

    if cli.once {
        engine.tick().await;
        return Ok(());
    }

    engine
        .reconciler_mut()
        .listener_mut()
        .print(&ControlsView::from_state(None, &device));

    let (requests, receiver) = mpsc::channel(16);

    input::spawn_reader(std::io::stdin(), requests.clone(), latest_rx, device.clone())
        .context("failed to start the input reader")?;

    if config.watch_signals {
        match manager.device_event_stream_signals(&device).await {
            Ok(mut events) => {
                let requests = requests.clone();
                tokio::spawn(async move {
                    while let Some(event) = events.next().await {
                        debug!("hotplug: {event:?}");
                        if requests.send(Request::Refresh).await.is_err() {
                            break;
                        }
                    }
                });
            }
            Err(e) => warn!("Hotplug signals unavailable, polling only: {e}"),
        }
    }

    let shutdown = requests;
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted");
            let _ = shutdown.send(Request::Shutdown).await;
        }
    });

    engine
        .run(IntervalTicker::new(config.poll_interval()), receiver)
        .await;

    info!("Shutting down");
    Ok(())
}
