//! Serde types for the subset of `tailscale status --json` the widget
//! relies on.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// Top-level status document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusDocument {
    /// Backend run state string, e.g. `"Running"`, `"Stopped"`,
    /// `"NeedsLogin"`.
    #[serde(default)]
    pub backend_state: Option<String>,
    /// Known peers, keyed by the peer's public key.
    #[serde(default)]
    pub peer: Option<PeerMap>,
}

/// Per-peer status attributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Peer {
    /// Whether this peer advertises itself as a usable exit node.
    #[serde(default)]
    pub exit_node_option: bool,
    /// Whether local traffic is currently routed through this peer.
    #[serde(default)]
    pub exit_node: bool,
    #[serde(default, rename = "DNSName")]
    pub dns_name: Option<String>,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Geographic location a hosted exit node reports.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Peer table in document order.
///
/// The exit-node menu lists peers in the order they appear in the raw
/// document, so the table is kept as a vector of entries instead of
/// `serde_json`'s default map type (which sorts keys).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeerMap(pub Vec<(String, Peer)>);

impl<'de> Deserialize<'de> for PeerMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PeerMapVisitor;

        impl<'de> Visitor<'de> for PeerMapVisitor {
            type Value = PeerMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of peer key to peer status")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PeerMap, A::Error> {
                let mut peers = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Peer>()? {
                    peers.push(entry);
                }
                Ok(PeerMap(peers))
            }
        }

        deserializer.deserialize_map(PeerMapVisitor)
    }
}
