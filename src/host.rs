//! Host adapter speaking newline-delimited JSON over stdio.
//!
//! Inbound frames arrive one per line on stdin, outbound plugin messages
//! are written one per line on stdout. Copy requests additionally go to
//! the system clipboard.

use entitykit_core::{find_node_mut, Error, Host, PluginMessage, SceneNode, UiCommand};
use serde::Deserialize;
use std::io::Write;

/// One line of host input
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostFrame {
    /// Replaces the current selection
    Selection {
        #[serde(default)]
        nodes: Vec<SceneNode>,
    },
    CopyEntityConfig,
    CopyEntityData,
}

impl HostFrame {
    pub fn parse(line: &str) -> entitykit_core::Result<Self> {
        serde_json::from_str(line).map_err(|e| Error::snapshot(e.to_string()))
    }

    /// The UI command carried by this frame, if any
    pub fn command(&self) -> Option<UiCommand> {
        match self {
            HostFrame::Selection { .. } => None,
            HostFrame::CopyEntityConfig => Some(UiCommand::CopyEntityConfig),
            HostFrame::CopyEntityData => Some(UiCommand::CopyEntityData),
        }
    }
}

/// [`Host`] backed by a line writer and, optionally, the system clipboard
pub struct StdioHost<W: Write> {
    out: W,
    nodes: Vec<SceneNode>,
    use_clipboard: bool,
}

impl<W: Write> StdioHost<W> {
    pub fn new(out: W, use_clipboard: bool) -> Self {
        Self {
            out,
            nodes: Vec::new(),
            use_clipboard,
        }
    }

    pub fn set_selection(&mut self, nodes: Vec<SceneNode>) {
        self.nodes = nodes;
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, message: &PluginMessage) -> entitykit_core::Result<()> {
        let line = serde_json::to_string(message)?;
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Host for StdioHost<W> {
    fn selection(&self) -> Vec<SceneNode> {
        self.nodes.clone()
    }

    fn post_message(&mut self, message: PluginMessage) {
        if let PluginMessage::Copy { text } = &message {
            if self.use_clipboard {
                if let Err(e) = copy_to_clipboard(text) {
                    tracing::warn!("{}", e);
                }
            }
        }
        if let Err(e) = self.write_line(&message) {
            tracing::warn!("Failed to write {} message: {}", message.kind(), e);
        }
    }

    fn rename_node(&mut self, id: &str, name: &str) {
        match find_node_mut(&mut self.nodes, id) {
            Some(node) => node.name = name.to_string(),
            None => tracing::debug!("Rename target {} not in selection", id),
        }
    }
}

fn copy_to_clipboard(text: &str) -> entitykit_core::Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    // Keep the clipboard owner alive long enough for managers to take it
    std::thread::sleep(std::time::Duration::from_millis(100));
    Ok(())
}
