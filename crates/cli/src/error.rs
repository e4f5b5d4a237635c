//! Error types for the tailscale CLI boundary.

use std::time::Duration;

/// Errors produced when invoking the `tailscale` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("command timed out after {0:?}")]
    Timeout(Duration),

    #[error("command exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },
}
