//! External CLI boundary for the tailscale client.
//!
//! [`StatusBackend`] abstracts the two commands the core needs: querying
//! the status document and switching the active exit node. [`TailscaleCli`]
//! is the production implementation shelling out to the `tailscale` binary.

mod error;
mod tailscale;

pub use error::CliError;
pub use tailscale::TailscaleCli;

use std::future::Future;

/// Boundary to the external VPN client.
pub trait StatusBackend: Send + Sync {
    /// Runs the status query and returns its raw JSON output.
    fn query_status(&self) -> impl Future<Output = Result<String, CliError>> + Send;

    /// Switches the active exit node. An empty `node_id` clears the
    /// selection.
    fn set_exit_node(&self, node_id: &str) -> impl Future<Output = Result<(), CliError>> + Send;
}
