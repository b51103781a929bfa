//! Message protocol between the plugin and the host UI.
//!
//! Outbound messages carry the generated artifacts and clipboard requests.
//! Inbound commands are forwarded by the host when the user presses one of
//! the copy buttons. Both sides speak JSON objects discriminated by `type`.

use serde::{Deserialize, Serialize};

/// Message posted from the plugin to the host display surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PluginMessage {
    /// HTML summary of shape counts
    #[serde(rename = "entity-infos")]
    EntityInfos {
        #[serde(rename = "entityInfo")]
        entity_info: String,
    },
    /// Placement and styling config text
    #[serde(rename = "entity-config")]
    EntityConfig {
        #[serde(rename = "entityConfig")]
        entity_config: String,
    },
    /// Outline coordinate data text
    #[serde(rename = "entity-data")]
    EntityData {
        #[serde(rename = "entityData")]
        entity_data: String,
    },
    /// Request to place `text` on the system clipboard
    #[serde(rename = "copy")]
    Copy { text: String },
}

impl PluginMessage {
    /// Wire name of this message
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EntityInfos { .. } => "entity-infos",
            Self::EntityConfig { .. } => "entity-config",
            Self::EntityData { .. } => "entity-data",
            Self::Copy { .. } => "copy",
        }
    }
}

/// Command forwarded by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiCommand {
    CopyEntityConfig,
    CopyEntityData,
    /// Anything else the UI might send; ignored by the plugin
    #[serde(other)]
    Unknown,
}
