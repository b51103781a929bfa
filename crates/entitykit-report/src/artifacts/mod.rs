//! Text artifacts built from a [`Report`].
//!
//! Each artifact has its own builder so its syntax can be tested on its
//! own. A run feeds the same groups to all three builders.

mod config;
mod data;
mod info;

pub use config::ConfigBuilder;
pub use data::DataBuilder;
pub use info::InfoBuilder;

use entitykit_core::PluginMessage;
use entitykit_settings::{Messages, ReportSettings};
use serde::{Deserialize, Serialize};

use crate::assembler::Report;

/// The three outputs of one run. Only meaningful as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    pub info: String,
    pub config: String,
    pub data: String,
}

impl Artifacts {
    /// Output for an empty selection
    pub fn placeholder(messages: &Messages) -> Self {
        Self {
            info: messages.select_prompt.clone(),
            config: messages.placeholder.clone(),
            data: messages.placeholder.clone(),
        }
    }

    /// Render a report.
    ///
    /// A report without groups yields the not-a-group message and empty
    /// config and data.
    pub fn render(report: &Report, settings: &ReportSettings) -> Self {
        if report.is_empty_selection() {
            return Self::placeholder(&settings.messages);
        }

        let mut info = InfoBuilder::new();
        let mut config = ConfigBuilder::new(settings);
        let mut data = DataBuilder::new(settings);
        for group in &report.groups {
            info.push_group(group);
            config.push_group(group);
            data.push_group(group);
        }

        let mut info = info.finish();
        if info.is_empty() {
            info = settings.messages.not_a_group.clone();
        }

        Self {
            info,
            config: config.finish(),
            data: data.finish(),
        }
    }

    /// Display messages in posting order: info, config, data
    pub fn messages(&self) -> [PluginMessage; 3] {
        [
            PluginMessage::EntityInfos {
                entity_info: self.info.clone(),
            },
            PluginMessage::EntityConfig {
                entity_config: self.config.clone(),
            },
            PluginMessage::EntityData {
                entity_data: self.data.clone(),
            },
        ]
    }
}
