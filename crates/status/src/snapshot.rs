//! Normalized connection status values derived from a status document.

use serde::{Deserialize, Serialize};

/// High-level connection state shown in the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
    /// Connected with traffic routed through an exit node.
    #[serde(rename = "exit-node")]
    UsingExitNode,
}

impl ConnectionState {
    /// Symbolic icon identifier for the panel indicator.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Disconnected => "network-offline-symbolic",
            Self::Connected => "network-vpn-symbolic",
            Self::UsingExitNode => "network-vpn-acquiring-symbolic",
        }
    }

    /// CSS class the widget applies for per-state styling.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Disconnected => "tailscale-disconnected",
            Self::Connected => "tailscale-connected",
            Self::UsingExitNode => "tailscale-exit-node",
        }
    }
}

/// The currently-believed-true status.
///
/// Replaced wholesale on each successful poll; consumers never observe a
/// partially updated snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub state: ConnectionState,
    /// The backend's self-reported run state, verbatim.
    pub backend_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_node_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_node_id: Option<String>,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            state: ConnectionState::Disconnected,
            backend_state: "Stopped".into(),
            exit_node_name: None,
            exit_node_id: None,
        }
    }
}

impl StatusSnapshot {
    /// Snapshot substituted when the status query or parse fails.
    pub fn degraded() -> Self {
        Self {
            backend_state: "Error".into(),
            ..Self::default()
        }
    }

    /// Whether two snapshots differ in a field consumers can observe.
    ///
    /// `backend_state` alone is not observable: intermediate run states
    /// ("Starting", "NoState") all render as disconnected and must not
    /// retrigger notifications.
    pub fn observably_differs(&self, other: &Self) -> bool {
        self.state != other.state
            || self.exit_node_name != other.exit_node_name
            || self.exit_node_id != other.exit_node_id
    }

    /// Exit-node id for a radio-style selection affordance; empty string
    /// when no exit node is in use.
    pub fn selection_value(&self) -> &str {
        match self.state {
            ConnectionState::UsingExitNode => self.exit_node_id.as_deref().unwrap_or(""),
            _ => "",
        }
    }

    /// Tooltip text for the panel widget.
    pub fn tooltip(&self) -> String {
        match self.state {
            ConnectionState::Disconnected => "Tailscale disconnected".into(),
            ConnectionState::Connected => "Tailscale connected".into(),
            ConnectionState::UsingExitNode => format!(
                "Tailscale connected\n\nExit Node: {}",
                self.exit_node_name.as_deref().unwrap_or("Unknown")
            ),
        }
    }
}

/// A peer offered as an exit-node choice.
///
/// Identity is by `id`; change detection compares all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitNode {
    /// Stable identifier passed back to the CLI on selection.
    pub id: String,
    /// Human-readable name shown in the menu.
    pub name: String,
    /// `"City, Country"` when the peer reports both, otherwise `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
