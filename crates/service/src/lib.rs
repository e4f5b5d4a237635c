//! Status-polling service for the tailscale panel widget.
//!
//! Drives the external CLI boundary on a fixed cadence, derives the
//! normalized status, and publishes change events to the UI layer:
//!
//! - [`StatusPoller`]: the state machine. One snapshot, one exit-node
//!   registry, change-only notifications.
//! - [`StatusService`]: the run loop. Poll interval, command channel,
//!   cancellation, and the short forced re-poll after an exit-node change.
//! - [`Handle`]: cloneable command sender for the UI layer.

mod poller;
mod service;
mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use poller::StatusPoller;
pub use service::{Handle, StatusService};
pub use types::{PollerConfig, ServiceEvent};
