//! Host collaborator interface
//!
//! The design tool owns the document. It hands the plugin the current
//! selection, displays whatever the plugin posts, and applies renames.

use crate::message::PluginMessage;
use crate::scene::{find_node_mut, SceneNode};

/// Design-tool runtime seen from the plugin
pub trait Host {
    /// Current selection, top-level nodes in selection order
    fn selection(&self) -> Vec<SceneNode>;

    /// Push a message to the host display surface
    fn post_message(&mut self, message: PluginMessage);

    /// Rename a node in the document
    fn rename_node(&mut self, _id: &str, _name: &str) {}
}

/// In-memory host that records everything posted to it.
///
/// Renames are applied to the held selection so that a following run sees
/// the updated names, as it would in a live document.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub nodes: Vec<SceneNode>,
    pub messages: Vec<PluginMessage>,
    pub renames: Vec<(String, String)>,
}

impl RecordingHost {
    pub fn new(nodes: Vec<SceneNode>) -> Self {
        Self {
            nodes,
            ..Default::default()
        }
    }

    pub fn set_selection(&mut self, nodes: Vec<SceneNode>) {
        self.nodes = nodes;
    }

    /// Text of the most recent `Copy` message
    pub fn last_copy(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match m {
            PluginMessage::Copy { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Host for RecordingHost {
    fn selection(&self) -> Vec<SceneNode> {
        self.nodes.clone()
    }

    fn post_message(&mut self, message: PluginMessage) {
        self.messages.push(message);
    }

    fn rename_node(&mut self, id: &str, name: &str) {
        if let Some(node) = find_node_mut(&mut self.nodes, id) {
            node.name = name.to_string();
            self.renames.push((id.to_string(), name.to_string()));
        } else {
            tracing::debug!("Rename target {} not found in selection", id);
        }
    }
}
