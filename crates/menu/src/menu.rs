//! Exit-node registry and menu descriptor building.

use serde::Serialize;

use tailtray_status::ExitNode;

/// A single entry of the exit-node menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Display text.
    pub label: String,
    /// Value passed to the selection command; empty string means "stop
    /// using any exit node".
    pub selection: String,
}

/// Holds the most recently observed exit-node candidates.
///
/// The list is replaced wholesale on change, never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExitNodeRegistry {
    nodes: Vec<ExitNode>,
}

impl ExitNodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored list when `candidates` differs from it.
    ///
    /// The comparison is structural and order-sensitive. Returns `true`
    /// when the list was replaced, i.e. when the menu must be rebuilt.
    /// An equal list is a no-op, so the menu does not flicker on every
    /// poll tick.
    pub fn reconcile(&mut self, candidates: Vec<ExitNode>) -> bool {
        if self.nodes == candidates {
            return false;
        }
        self.nodes = candidates;
        true
    }

    /// The stored candidates, in peer-encounter order.
    pub fn nodes(&self) -> &[ExitNode] {
        &self.nodes
    }

    /// Builds the menu descriptor: a leading "None" entry (clear the exit
    /// node) followed by one entry per stored node.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        let mut entries = Vec::with_capacity(self.nodes.len() + 1);
        entries.push(MenuEntry {
            label: "None".into(),
            selection: String::new(),
        });

        for node in &self.nodes {
            let label = match &node.location {
                Some(location) => format!("{} ({location})", node.name),
                None => node.name.clone(),
            };
            entries.push(MenuEntry {
                label,
                selection: node.id.clone(),
            });
        }

        entries
    }
}
