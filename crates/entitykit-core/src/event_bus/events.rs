//! Event type definitions for the event bus.

use serde::{Deserialize, Serialize};

use crate::message::UiCommand;

/// Notification delivered to the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    /// The plugin was started by the host
    Loaded,
    /// The user changed the selection
    SelectionChanged,
    /// The host UI forwarded a command
    Ui(UiCommand),
}

impl PluginEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            PluginEvent::Loaded => EventCategory::Lifecycle,
            PluginEvent::SelectionChanged => EventCategory::Selection,
            PluginEvent::Ui(_) => EventCategory::Ui,
        }
    }

    /// Whether this event requires recomputing the artifacts
    pub fn triggers_refresh(&self) -> bool {
        matches!(self, PluginEvent::Loaded | PluginEvent::SelectionChanged)
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Plugin start-up.
    Lifecycle,
    /// Selection changes.
    Selection,
    /// Commands from the host UI.
    Ui,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Lifecycle => write!(f, "Lifecycle"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Ui => write!(f, "Ui"),
        }
    }
}
