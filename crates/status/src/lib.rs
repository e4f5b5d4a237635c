//! Tailscale status document types and snapshot derivation.
//!
//! Parses the JSON emitted by `tailscale status --json` into a normalized
//! [`StatusSnapshot`] plus the list of peers currently offered as exit
//! nodes. Only the document subset the panel widget relies on is decoded;
//! everything else is ignored.

mod derive;
mod snapshot;
mod wire;

pub use derive::{Derived, derive_snapshot, parse_status};
pub use snapshot::{ConnectionState, ExitNode, StatusSnapshot};
pub use wire::{Location, Peer, PeerMap, StatusDocument};
