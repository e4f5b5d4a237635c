//! Service run loop and command handle.

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use tailtray_cli::StatusBackend;

use crate::poller::StatusPoller;
use crate::types::{PollerConfig, ServiceEvent};

/// Commands accepted by the service loop.
#[derive(Debug)]
enum Command {
    /// Run a poll cycle now, out of cadence.
    PollNow,
    /// Switch the active exit node (empty id clears it).
    SetExitNode(String),
}

/// Cloneable handle for sending commands to a running [`StatusService`].
#[derive(Debug, Clone)]
pub struct Handle {
    commands_tx: mpsc::Sender<Command>,
}

impl Handle {
    /// Requests an out-of-cadence poll.
    pub async fn poll_now(&self) {
        let _ = self.commands_tx.send(Command::PollNow).await;
    }

    /// Requests switching the active exit node. An empty `node_id` clears
    /// the selection. Failures are logged by the service and otherwise
    /// swallowed; the next regular poll shows the true state.
    pub async fn set_exit_node(&self, node_id: impl Into<String>) {
        let _ = self
            .commands_tx
            .send(Command::SetExitNode(node_id.into()))
            .await;
    }
}

/// Status-polling service: drives a [`StatusPoller`] on a fixed cadence
/// and executes exit-node selection commands.
///
/// All mutable state lives behind one `select!` loop, so polls never
/// overlap and no locking is needed.
pub struct StatusService<B> {
    poller: StatusPoller<B>,
    config: PollerConfig,
    commands_tx: mpsc::Sender<Command>,
    commands_rx: mpsc::Receiver<Command>,
}

impl<B: StatusBackend> StatusService<B> {
    /// Creates the service plus its command handle and event receiver.
    pub fn new(backend: B, config: PollerConfig) -> (Self, Handle, mpsc::Receiver<ServiceEvent>) {
        let (events_tx, events_rx) = mpsc::channel(config.event_capacity);
        let (commands_tx, commands_rx) = mpsc::channel(16);
        let handle = Handle {
            commands_tx: commands_tx.clone(),
        };
        let service = Self {
            poller: StatusPoller::new(backend, events_tx),
            config,
            commands_tx,
            commands_rx,
        };
        (service, handle, events_rx)
    }

    /// Read access to the poller (snapshot, selection, menu) before the
    /// loop takes ownership.
    pub fn poller(&self) -> &StatusPoller<B> {
        &self.poller
    }

    /// Runs the polling loop until `cancel` fires.
    ///
    /// The interval's first tick is immediate, which doubles as the eager
    /// startup poll. Each cycle completes before the next is dispatched.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval = ?self.config.poll_interval, "status service started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("status service cancelled");
                    break;
                }
                _ = ticker.tick() => self.poller.poll().await,
                cmd = self.commands_rx.recv() => match cmd {
                    Some(Command::PollNow) => self.poller.poll().await,
                    Some(Command::SetExitNode(node_id)) => self.set_exit_node(&node_id).await,
                    // Unreachable while the service holds a sender clone.
                    None => break,
                },
            }
        }
    }

    /// Applies an exit-node change and, on success, schedules the forced
    /// re-poll after the refresh delay.
    async fn set_exit_node(&mut self, node_id: &str) {
        if !self.poller.request_exit_node(node_id).await {
            return;
        }

        let commands_tx = self.commands_tx.clone();
        let delay = self.config.refresh_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = commands_tx.send(Command::PollNow).await;
        });
    }
}
