//! EntityKit Settings Crate
//!
//! Report settings: output constants, fallback texts, and the switches for
//! group rotation and name write-back. Settings load from JSON or TOML files
//! stored in the platform config directory.

pub mod config;
pub mod error;

pub use config::{GroupRotation, Messages, ReportSettings};
pub use error::{SettingsError, SettingsResult};
