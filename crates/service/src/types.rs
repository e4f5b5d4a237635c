//! Public types for the status-polling service.

use std::time::Duration;

use tailtray_menu::MenuEntry;
use tailtray_status::{ConnectionState, StatusSnapshot};

/// Events emitted by the service over its event channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEvent {
    /// The observable status changed; carries the new snapshot.
    StatusChanged(StatusSnapshot),
    /// The high-level connection state after a status change.
    StateChanged(ConnectionState),
    /// The panel icon for the new status.
    IconChanged(&'static str),
    /// The exit-node menu must be rebuilt from these entries.
    MenuChanged(Vec<MenuEntry>),
    /// The radio-style selection affordance should show this exit-node id
    /// (empty string: no exit node in use).
    SelectionChanged(String),
}

/// Polling cadence and forced-refresh configuration.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Interval between regular status polls.
    pub poll_interval: Duration,
    /// Delay before the forced re-poll after a successful exit-node
    /// change; the backend needs a moment to apply it.
    pub refresh_delay: Duration,
    /// Capacity of the event channel.
    pub event_capacity: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(3),
            refresh_delay: Duration::from_millis(500),
            event_capacity: 64,
        }
    }
}
