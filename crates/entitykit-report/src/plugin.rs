//! Plugin session.
//!
//! A [`Plugin`] owns the host connection and the artifacts of the latest
//! run. Selection events recompute the artifacts; copy commands read
//! whatever the latest run produced.

use entitykit_core::{
    EventBus, EventFilter, Host, PluginEvent, PluginMessage, SubscriptionId, UiCommand,
};
use entitykit_settings::ReportSettings;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use crate::artifacts::Artifacts;
use crate::assembler::{assemble, Report};

/// Shared handle on the artifacts of the latest run
pub type CurrentArtifacts = Arc<RwLock<Artifacts>>;

pub struct Plugin<H: Host> {
    host: H,
    settings: ReportSettings,
    current: CurrentArtifacts,
}

impl<H: Host> Plugin<H> {
    pub fn new(host: H, settings: ReportSettings) -> Self {
        let current = Arc::new(RwLock::new(Artifacts::placeholder(&settings.messages)));
        Self {
            host,
            settings,
            current,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Handle that stays valid across runs
    pub fn current(&self) -> CurrentArtifacts {
        Arc::clone(&self.current)
    }

    /// Snapshot of the latest artifacts
    pub fn artifacts(&self) -> Artifacts {
        self.current.read().clone()
    }

    pub fn handle(&mut self, event: PluginEvent) {
        if event.triggers_refresh() {
            self.refresh();
        } else if let PluginEvent::Ui(command) = event {
            self.copy(command);
        }
    }

    /// Recompute the artifacts from the current selection and post them.
    pub fn refresh(&mut self) -> Report {
        let selection = self.host.selection();
        let report = assemble(&selection, &self.settings);

        if self.settings.write_back_names {
            for rename in &report.renames {
                tracing::debug!("Renaming node {} to '{}'", rename.id, rename.name);
                self.host.rename_node(&rename.id, &rename.name);
            }
        }

        let artifacts = Artifacts::render(&report, &self.settings);
        let messages = artifacts.messages();
        *self.current.write() = artifacts;

        for message in messages {
            self.host.post_message(message);
        }

        tracing::info!(
            "Report run: {} selected, {} group(s), {} shape(s)",
            report.selection_len,
            report.groups.len(),
            report.shape_count()
        );
        report
    }

    /// Post the latest config or data text for the clipboard.
    pub fn copy(&mut self, command: UiCommand) {
        let text = {
            let current = self.current.read();
            match command {
                UiCommand::CopyEntityConfig => current.config.clone(),
                UiCommand::CopyEntityData => current.data.clone(),
                UiCommand::Unknown => {
                    tracing::debug!("Ignoring unknown UI command");
                    return;
                }
            }
        };
        tracing::debug!("Copying {} byte(s) for {:?}", text.len(), command);
        self.host.post_message(PluginMessage::Copy { text });
    }
}

impl<H: Host + Send + 'static> Plugin<H> {
    /// Subscribe a shared session to every plugin event on `bus`.
    pub fn attach(this: &Arc<Mutex<Self>>, bus: &EventBus) -> SubscriptionId {
        let plugin = Arc::clone(this);
        bus.subscribe(EventFilter::All, move |event| {
            plugin.lock().handle(event);
        })
    }
}

impl<H: Host + std::fmt::Debug> std::fmt::Debug for Plugin<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("host", &self.host)
            .field("settings", &self.settings)
            .field("current", &*self.current.read())
            .finish()
    }
}
