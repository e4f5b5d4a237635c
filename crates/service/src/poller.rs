//! Status poller: owns the authoritative snapshot and the exit-node
//! registry, and publishes change events.

use tokio::sync::mpsc;
use tracing::{info, warn};

use tailtray_cli::StatusBackend;
use tailtray_menu::{ExitNodeRegistry, MenuEntry};
use tailtray_status::{ConnectionState, Derived, StatusSnapshot, parse_status};

use crate::types::ServiceEvent;

/// Owns the current [`StatusSnapshot`] and republishes it only on change.
pub struct StatusPoller<B> {
    backend: B,
    snapshot: StatusSnapshot,
    registry: ExitNodeRegistry,
    events_tx: mpsc::Sender<ServiceEvent>,
}

impl<B: StatusBackend> StatusPoller<B> {
    pub(crate) fn new(backend: B, events_tx: mpsc::Sender<ServiceEvent>) -> Self {
        Self {
            backend,
            snapshot: StatusSnapshot::default(),
            registry: ExitNodeRegistry::new(),
            events_tx,
        }
    }

    /// The currently-believed-true status.
    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    /// Exit-node id for the selection affordance (empty when none active).
    pub fn current_selection(&self) -> &str {
        self.snapshot.selection_value()
    }

    /// Current menu descriptor, for an initial render before any
    /// [`ServiceEvent::MenuChanged`] arrives.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.registry.menu_entries()
    }

    /// Runs one poll cycle: query, parse, compare, notify.
    ///
    /// Query and parse failures degrade the snapshot to
    /// `{Disconnected, "Error"}` instead of propagating. This is a
    /// monitoring widget, not a control-plane client; the next tick
    /// resolves the failure.
    pub async fn poll(&mut self) {
        let raw = match self.backend.query_status().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "status query failed");
                self.degrade();
                return;
            }
        };

        match parse_status(&raw) {
            Ok(derived) => self.apply(derived),
            Err(e) => {
                warn!(error = %e, "malformed status document");
                self.degrade();
            }
        }
    }

    /// Runs the exit-node mutation command. Returns whether it succeeded;
    /// the caller schedules the forced re-poll. Failures are logged and
    /// otherwise swallowed; the next regular poll shows the true state.
    pub async fn request_exit_node(&self, node_id: &str) -> bool {
        match self.backend.set_exit_node(node_id).await {
            Ok(()) => {
                info!(node = %node_id, "exit node change requested");
                true
            }
            Err(e) => {
                warn!(node = %node_id, error = %e, "failed to set exit node");
                false
            }
        }
    }

    /// Applies a freshly derived status.
    fn apply(&mut self, derived: Derived) {
        if self.snapshot.observably_differs(&derived.snapshot) {
            self.snapshot = derived.snapshot;
            self.notify_status();
        }

        // The node list can change independently of the top-level status,
        // e.g. a new peer appears while still disconnected from it.
        if self.registry.reconcile(derived.exit_nodes) {
            self.emit(ServiceEvent::MenuChanged(self.registry.menu_entries()));
        }
    }

    /// Replaces the snapshot with the degraded disconnected value, unless
    /// already disconnected (avoids redundant notifications). The registry
    /// keeps its last good list.
    fn degrade(&mut self) {
        if self.snapshot.state == ConnectionState::Disconnected {
            return;
        }
        self.snapshot = StatusSnapshot::degraded();
        self.notify_status();
    }

    fn notify_status(&self) {
        self.emit(ServiceEvent::StatusChanged(self.snapshot.clone()));
        self.emit(ServiceEvent::StateChanged(self.snapshot.state));
        self.emit(ServiceEvent::IconChanged(self.snapshot.state.icon_name()));
        self.emit(ServiceEvent::SelectionChanged(
            self.current_selection().to_owned(),
        ));
    }

    fn emit(&self, event: ServiceEvent) {
        // try_send keeps a stalled consumer from blocking the poll cadence.
        if let Err(e) = self.events_tx.try_send(event) {
            warn!("dropping service event: {e}");
        }
    }
}
