//! Production backend shelling out to the `tailscale` binary.

use std::process::Output;
use std::time::Duration;

use tokio::process::Command;

use crate::{CliError, StatusBackend};

/// Default bound on a single CLI invocation. A hung binary must not stall
/// the polling cadence indefinitely.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Invokes the `tailscale` binary for status queries and exit-node changes.
#[derive(Debug, Clone)]
pub struct TailscaleCli {
    binary: String,
    timeout: Duration,
}

impl Default for TailscaleCli {
    fn default() -> Self {
        Self {
            binary: "tailscale".into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TailscaleCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom binary path (e.g. a wrapper script).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            ..Self::default()
        }
    }

    /// Overrides the per-invocation timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, args: &[&str]) -> Result<Output, CliError> {
        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.binary).args(args).output(),
        )
        .await
        .map_err(|_| CliError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(CliError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(output)
    }
}

impl StatusBackend for TailscaleCli {
    async fn query_status(&self) -> Result<String, CliError> {
        let output = self.run(&["status", "--json"]).await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn set_exit_node(&self, node_id: &str) -> Result<(), CliError> {
        self.run(&["set", "--exit-node", node_id]).await?;
        Ok(())
    }
}
