//! Derivation of a [`StatusSnapshot`] and exit-node candidates from a raw
//! status document.

use crate::snapshot::{ConnectionState, ExitNode, StatusSnapshot};
use crate::wire::{Location, StatusDocument};

/// Backend state string reported while the client is fully up.
const BACKEND_RUNNING: &str = "Running";
/// Backend state assumed when the document carries none.
const BACKEND_STOPPED: &str = "Stopped";

/// Result of digesting one status document.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub snapshot: StatusSnapshot,
    /// Exit-node candidates, in the order peers appear in the document.
    pub exit_nodes: Vec<ExitNode>,
}

/// Parses a raw `tailscale status --json` document and derives the
/// normalized snapshot plus exit-node candidates.
pub fn parse_status(raw: &str) -> Result<Derived, serde_json::Error> {
    Ok(derive_snapshot(&serde_json::from_str(raw)?))
}

/// Derives the snapshot and candidate list from a decoded document.
///
/// Peers are scanned even when the backend is not running, so the menu can
/// still offer a node list in partial states (stopped, needs-login).
pub fn derive_snapshot(doc: &StatusDocument) -> Derived {
    let mut exit_nodes = Vec::new();
    // (display name, selection id) of the peer flagged as the active exit
    // node. The name has no key fallback; the id always resolves.
    let mut active: Option<(Option<String>, String)> = None;

    if let Some(peers) = &doc.peer {
        for (key, peer) in &peers.0 {
            let dns = peer.dns_name.as_deref();
            let host = peer.host_name.as_deref();

            if peer.exit_node_option {
                exit_nodes.push(ExitNode {
                    id: pick([dns, host]).unwrap_or(key).to_owned(),
                    name: pick([host, dns]).unwrap_or(key).to_owned(),
                    location: peer.location.as_ref().and_then(location_label),
                });
            }

            if peer.exit_node {
                active = Some((
                    pick([host, dns]).map(str::to_owned),
                    pick([dns, host]).unwrap_or(key).to_owned(),
                ));
            }
        }
    }

    let backend_state = non_empty(doc.backend_state.as_deref());
    let snapshot = if backend_state != Some(BACKEND_RUNNING) {
        StatusSnapshot {
            state: ConnectionState::Disconnected,
            backend_state: backend_state.unwrap_or(BACKEND_STOPPED).to_owned(),
            exit_node_name: None,
            exit_node_id: None,
        }
    } else if let Some((name, id)) = active {
        StatusSnapshot {
            state: ConnectionState::UsingExitNode,
            backend_state: BACKEND_RUNNING.to_owned(),
            exit_node_name: name,
            exit_node_id: Some(id),
        }
    } else {
        StatusSnapshot {
            state: ConnectionState::Connected,
            backend_state: BACKEND_RUNNING.to_owned(),
            exit_node_name: None,
            exit_node_id: None,
        }
    };

    Derived {
        snapshot,
        exit_nodes,
    }
}

/// First non-empty candidate, in preference order. Tailscale emits empty
/// strings for absent names, so those fall through to the next tier.
fn pick<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// `"City, Country"` when both parts are non-empty, otherwise `None`; a
/// partial label like `"Berlin, "` is never produced.
fn location_label(location: &Location) -> Option<String> {
    let city = non_empty(location.city.as_deref())?;
    let country = non_empty(location.country.as_deref())?;
    Some(format!("{city}, {country}"))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
