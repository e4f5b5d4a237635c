//! Scripted backend for exercising the poller without a real binary.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::json;

use tailtray_cli::{CliError, StatusBackend};

/// Scripted [`StatusBackend`]: queued query responses with a fallback
/// document, plus a record of applied exit-node ids.
#[derive(Clone)]
pub(crate) struct MockBackend {
    fallback: String,
    responses: Arc<Mutex<VecDeque<Result<String, CliError>>>>,
    applied: Arc<Mutex<Vec<String>>>,
    apply_fails: Arc<AtomicBool>,
    polls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Backend returning `fallback` for every query not otherwise scripted.
    pub(crate) fn new(fallback: String) -> Self {
        Self {
            fallback,
            responses: Arc::new(Mutex::new(VecDeque::new())),
            applied: Arc::new(Mutex::new(Vec::new())),
            apply_fails: Arc::new(AtomicBool::new(false)),
            polls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queues one response consumed before the fallback applies again.
    pub(crate) fn push_response(&self, response: Result<String, CliError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queues one failing query.
    pub(crate) fn push_failure(&self) {
        self.push_response(Err(CliError::CommandFailed {
            status: 1,
            stderr: "backend down".into(),
        }));
    }

    /// Makes every exit-node application fail.
    pub(crate) fn fail_apply(&self) {
        self.apply_fails.store(true, Ordering::SeqCst);
    }

    /// Shared record of exit-node ids applied so far.
    pub(crate) fn applied_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.applied)
    }

    /// Shared count of queries served so far.
    pub(crate) fn polls_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.polls)
    }
}

impl StatusBackend for MockBackend {
    async fn query_status(&self) -> Result<String, CliError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(self.fallback.clone()),
        }
    }

    async fn set_exit_node(&self, node_id: &str) -> Result<(), CliError> {
        if self.apply_fails.load(Ordering::SeqCst) {
            return Err(CliError::CommandFailed {
                status: 1,
                stderr: "exit node rejected".into(),
            });
        }
        self.applied.lock().unwrap().push(node_id.to_owned());
        Ok(())
    }
}

/// Running, one offered exit node, none active.
pub(crate) fn connected_doc() -> String {
    json!({
        "BackendState": "Running",
        "Peer": {
            "nodekey:aa": {
                "ExitNodeOption": true,
                "HostName": "exit1",
                "DNSName": "exit1.ts.net"
            }
        }
    })
    .to_string()
}

/// Running with the offered exit node active.
pub(crate) fn exit_node_doc() -> String {
    json!({
        "BackendState": "Running",
        "Peer": {
            "nodekey:aa": {
                "ExitNodeOption": true,
                "ExitNode": true,
                "HostName": "exit1",
                "DNSName": "exit1.ts.net"
            }
        }
    })
    .to_string()
}

/// Backend stopped, no peers.
pub(crate) fn stopped_doc() -> String {
    json!({"BackendState": "Stopped"}).to_string()
}
