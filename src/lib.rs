//! # EntityKit
//!
//! Extracts placement, fill and outline data from grouped design shapes
//! and renders it as entity config and data for game code.
//!
//! ## Architecture
//!
//! EntityKit is organized as a workspace with multiple crates:
//!
//! 1. **entitykit-core** - Scene model, host contract, messages, event bus
//! 2. **entitykit-geometry** - Path parsing, deduplication, placement
//! 3. **entitykit-settings** - Report settings and persistence
//! 4. **entitykit-report** - Classification, assembly, artifacts, plugin session
//! 5. **entitykit** - Stdio host binary that integrates all crates

pub mod host;

use entitykit_core::{EventBus, PluginEvent};
use entitykit_report::Plugin;
use entitykit_settings::ReportSettings;
use parking_lot::Mutex;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub use entitykit_core::{Error, Result};
pub use host::{HostFrame, StdioHost};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "ENTITYKIT_SETTINGS";

/// Set to any value to log JSON lines instead of text
pub const LOG_JSON_ENV: &str = "ENTITYKIT_LOG_JSON";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, stdout carries the host protocol
/// - RUST_LOG environment variable support
/// - JSON lines when `ENTITYKIT_LOG_JSON` is set
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if std::env::var_os(LOG_JSON_ENV).is_some() {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .with_ansi(false);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Load settings from `$ENTITYKIT_SETTINGS` or the default location.
pub fn load_settings() -> anyhow::Result<ReportSettings> {
    let explicit = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
    load_settings_from(explicit.as_deref())
}

/// Load settings from `explicit` or the default location.
///
/// An explicit file must exist. A missing default file, or a platform
/// without a config directory, yields the defaults.
pub fn load_settings_from(explicit: Option<&Path>) -> anyhow::Result<ReportSettings> {
    if let Some(path) = explicit {
        tracing::info!("Loading settings from {}", path.display());
        return Ok(ReportSettings::load_from_file(path)?);
    }

    match ReportSettings::default_path() {
        Ok(path) => Ok(ReportSettings::load_or_default(&path)?),
        Err(e) => {
            tracing::warn!("{}, using default settings", e);
            Ok(ReportSettings::default())
        }
    }
}

/// Feed host frames from `input` to a session attached to `bus`.
///
/// Malformed frames are logged and skipped. Returns the number of frames
/// handled once the input is exhausted.
pub fn run<R, W>(
    input: R,
    plugin: &Mutex<Plugin<StdioHost<W>>>,
    bus: &EventBus,
) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    for (index, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Skipping frame on line {}: {}", index + 1, e);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let frame = match HostFrame::parse(&line) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Skipping frame on line {}: {}", index + 1, e);
                continue;
            }
        };

        let event = match frame {
            HostFrame::Selection { nodes } => {
                tracing::debug!("Selection replaced: {} node(s)", nodes.len());
                plugin.lock().host_mut().set_selection(nodes);
                PluginEvent::SelectionChanged
            }
            other => match other.command() {
                Some(command) => PluginEvent::Ui(command),
                None => continue,
            },
        };

        bus.publish(event)?;
        handled += 1;
    }
    Ok(handled)
}
