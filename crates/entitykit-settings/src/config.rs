//! Report settings
//!
//! Every value has a default that reproduces the reference output exactly,
//! so an absent or partial settings file never changes the artifacts
//! unexpectedly. Files may be JSON or TOML, chosen by extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Rounding digits beyond this are rejected.
const MAX_DIGITS: usize = 20;

/// How a group's own rotation enters the placement of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRotation {
    /// Groups are treated as axis-aligned
    #[default]
    Fixed,
    /// Extract the rotation from the group's own transform
    FromTransform,
}

impl std::fmt::Display for GroupRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::FromTransform => write!(f, "from_transform"),
        }
    }
}

/// Texts shown instead of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Info text when nothing is selected
    pub select_prompt: String,
    /// Info text when the selection holds no group
    pub not_a_group: String,
    /// Config and data text when nothing is selected
    pub placeholder: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            select_prompt: "Sélectionner une entité. (groupe)".to_string(),
            not_a_group: "Cette sélection n'est pas un groupe.".to_string(),
            placeholder: "_".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// `scaleFactor` written for every shape in the config artifact
    pub scale_factor: f64,
    /// `fillStyle` for shapes without a solid first fill
    pub fallback_fill: String,
    pub origin_digits: usize,
    pub rotation_digits: usize,
    pub coordinate_digits: usize,
    pub group_rotation: GroupRotation,
    /// Rename nodes in the document to their normalized names
    pub write_back_names: bool,
    pub messages: Messages,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            scale_factor: 3.5,
            fallback_fill: "#2D2D2D".to_string(),
            origin_digits: 3,
            rotation_digits: 4,
            coordinate_digits: 3,
            group_rotation: GroupRotation::Fixed,
            write_back_names: true,
            messages: Messages::default(),
        }
    }
}

impl ReportSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings file location: `<config dir>/entitykit/settings.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("entitykit").join("settings.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load settings from a `.json` or `.toml` file and validate them.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        settings.validate()?;
        tracing::debug!("Loaded report settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`load_from_file`](Self::load_from_file), but a missing file
    /// yields the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::warn!(
                "No settings file at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save settings, choosing the format from the file extension.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(SettingsError::invalid(
                "scale_factor",
                "must be a finite number > 0",
            ));
        }

        if self.fallback_fill.trim().is_empty() {
            return Err(SettingsError::invalid("fallback_fill", "must not be empty"));
        }

        for (key, digits) in [
            ("origin_digits", self.origin_digits),
            ("rotation_digits", self.rotation_digits),
            ("coordinate_digits", self.coordinate_digits),
        ] {
            if digits > MAX_DIGITS {
                return Err(SettingsError::invalid(
                    key,
                    format!("must be <= {}", MAX_DIGITS),
                ));
            }
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
