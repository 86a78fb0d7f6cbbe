//! The send loop.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::config::SharedConfig;
use crate::messages::read_messages;
use crate::sender::client::MessageClient;

/// Minimum extra seconds added to every pause.
pub const DEFAULT_JITTER_MIN: u64 = 1;

/// Maximum extra seconds added to every pause.
pub const DEFAULT_JITTER_MAX: u64 = 10;

/// The one fatal runtime condition: the messages file went away.
#[derive(Debug, Error)]
pub enum SenderError {
    #[error("messages file not found: {path}")]
    MessagesFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pause duration: base delay plus a uniform random extra in
/// `[min_extra, max_extra]` seconds.
pub fn jittered_delay(base_secs: u64, min_extra: u64, max_extra: u64) -> Duration {
    let extra = rand::thread_rng().gen_range(min_extra..=max_extra);
    Duration::from_secs(base_secs.saturating_add(extra))
}

/// Sends every line of the messages file in order, forever.
///
/// The messages file is re-read at the top of each pass; the delay is
/// re-read from the shared config before each sleep, so a reload takes
/// effect at the next pause rather than mid-send.
pub struct SenderLoop {
    client: MessageClient,
    config: SharedConfig,
    jitter: (u64, u64),
}

impl SenderLoop {
    pub fn new(client: MessageClient, config: SharedConfig) -> Self {
        Self {
            client,
            config,
            jitter: (DEFAULT_JITTER_MIN, DEFAULT_JITTER_MAX),
        }
    }

    /// Override the jitter range. Tests run with (0, 0).
    pub fn with_jitter(mut self, min_extra: u64, max_extra: u64) -> Self {
        self.jitter = (min_extra, max_extra);
        self
    }

    /// Run until shutdown, or until the messages file becomes unreadable.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> Result<(), SenderError> {
        loop {
            if shutdown.try_recv().is_ok() {
                tracing::info!("Sender received shutdown signal, exiting");
                return Ok(());
            }

            let snapshot = self.config.current();
            let messages = read_messages(&snapshot.messages_file).map_err(|source| {
                SenderError::MessagesFile {
                    path: snapshot.messages_file.clone(),
                    source,
                }
            })?;

            for message in &messages {
                match self.client.post_message(message).await {
                    Ok(status) if status.is_success() => {
                        tracing::info!("Message sent");
                    }
                    Ok(status) => {
                        // Non-success is not an error at normal verbosity.
                        tracing::debug!(status = %status, "Send got non-success response");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, message = %message, "Error sending message");
                    }
                }

                let delay = self.config.current().delay_secs;
                let pause = jittered_delay(delay, self.jitter.0, self.jitter.1);
                tokio::select! {
                    _ = sleep(pause) => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Sender received shutdown signal, exiting");
                        return Ok(());
                    }
                }
            }

            tracing::info!("Finished sending all messages, restarting");
        }
    }
}
