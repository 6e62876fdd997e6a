use crate::app_config::AppConfig;
use crate::backend::{BackendError, EndpointError, Endpoints, acknowledge, fetch_command, register};
use crate::device::{Transmitter, dispatch};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Starting,
    Running,
    Stopping,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Starting => f.write_str("STARTING"),
            State::Running => f.write_str("RUNNING"),
            State::Stopping => f.write_str("STOPPING"),
        }
    }
}

/// What a single poll cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Idle,
    Acknowledged { command_id: String },
    Unacknowledged { command_id: String },
    Failed,
}

/// A simulated IR device that polls the backend for commands and executes them.
#[derive(Debug)]
pub struct Simulator<T: Transmitter> {
    client: Client,
    device_id: String,
    endpoints: Endpoints,
    poll_interval: Duration,
    transmitter: T,
}

impl<T: Transmitter> Simulator<T> {
    pub fn new(client: Client, config: &AppConfig, transmitter: T) -> Result<Self, EndpointError> {
        let device_id = config.device().id().to_string();
        let endpoints = Endpoints::new(config.backend().url(), &device_id)?;

        Ok(Simulator {
            client,
            device_id,
            endpoints,
            poll_interval: config.device().poll_interval(),
            transmitter,
        })
    }

    /// Registers the device, then polls until `shutdown` turns `true`. Returns the number of completed cycles.
    ///
    /// Shutdown is only observed between cycles, a request in flight always completes.
    #[instrument(skip_all, fields(device_id = %self.device_id))]
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> u64 {
        self.enter(State::Starting);
        if let Err(e) = register(&self.client, &self.endpoints).await {
            warn!("⚠️ Unable to register the device, continuing anyway: {}", e);
        }

        self.enter(State::Running);
        let mut cycles = 0;
        while !*shutdown.borrow() {
            self.run_cycle().await;
            cycles += 1;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        self.enter(State::Stopping);
        info!("Completed {} poll cycles", cycles);
        cycles
    }

    /// Polls once and, when a command is pending, executes and acknowledges it.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let command = match fetch_command(&self.client, &self.endpoints).await {
            Ok(Some(command)) => command,
            Ok(None) => return CycleOutcome::Idle,
            Err(BackendError::UnexpectedStatus(status)) => {
                error!(status_code = %status, "❌ Error polling for commands: {}", status);
                return CycleOutcome::Failed;
            }
            Err(e) => {
                warn!("⚠️ Unable to poll for commands: {}", e);
                return CycleOutcome::Failed;
            }
        };

        if let Err(e) = dispatch(&command, &self.transmitter) {
            warn!(command_id = command.id, "⚠️ Unable to process command: {}", e);
            return CycleOutcome::Failed;
        }

        match acknowledge(&self.client, &self.endpoints, &command.id).await {
            Ok(_) => CycleOutcome::Acknowledged { command_id: command.id },
            Err(e) => {
                warn!(command_id = command.id, "⚠️ Unable to acknowledge command: {}", e);
                CycleOutcome::Unacknowledged { command_id: command.id }
            }
        }
    }

    fn enter(&self, state: State) {
        info!(device_id = self.device_id, "🔁 {}", state);
    }
}
