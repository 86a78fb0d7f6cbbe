//! Channel autoposter binary.
//!
//! Reads a flat `key=value` config, then loops over a messages file forever,
//! posting each line to the configured channel with a jittered delay between
//! sends. The config file is watched for changes and hot-reloaded.

use std::path::PathBuf;

use clap::Parser;

use msgdrip::config::{load_config, ConfigWatcher, SharedConfig};
use msgdrip::lifecycle::{signals, Shutdown};
use msgdrip::observability;
use msgdrip::sender::{MessageClient, SenderLoop};

#[derive(Parser)]
#[command(name = "msgdrip")]
#[command(about = "Posts a file of messages to a chat channel on a loop", long_about = None)]
struct Cli {
    /// Path to the key=value config file.
    #[arg(short, long, default_value = "config.txt")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    tracing::info!(
        channel_url = config.channel_url(),
        delay_secs = config.delay_secs,
        "Messages will be sent with a randomized delay"
    );

    // Headers and channel id are fixed for the life of the process; reloads
    // only affect delay, messages path, and the raw map.
    let client = MessageClient::from_config(&config)?;

    let shared = SharedConfig::new(config);

    let (watcher, mut updates) = ConfigWatcher::new(&cli.config);
    // The notify handle must stay alive for events to keep flowing. Failure
    // to watch is not fatal; the bot just runs without hot reload.
    let _fs_watcher = match watcher.run() {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::error!(error = %e, "Failed to watch config file");
            None
        }
    };

    let reload_target = shared.clone();
    tokio::spawn(async move {
        while let Some(new_config) = updates.recv().await {
            tracing::info!(delay_secs = new_config.delay_secs, "Config reloaded");
            reload_target.replace(new_config);
        }
    });

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_interrupt(shutdown.clone()));

    let sender = SenderLoop::new(client, shared);
    sender.run(shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
