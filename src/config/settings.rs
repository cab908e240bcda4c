//! Global settings (`nexus.toml`) and per-profile overrides.
use serde::Deserialize;
use std::path::Path;

use super::{NexusPaths, is_plain_name};
use super::toml_loader;
use crate::error::ConfigError;

/// Name of the table holding nexus settings, in both `nexus.toml` and profiles.
pub const SETTINGS_TABLE: &str = "nexus";

/// Output base name used when `generate_file_name` is not configured.
pub const DEFAULT_OUTPUT_BASE_NAME: &str = "nexus";

/// Effective settings for one render operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    /// Components to render, in render order. Never empty.
    pub components: Vec<String>,
    /// Base file name shared by every rendered output.
    pub output_base_name: String,
}

/// The raw `[nexus]` table as written by the user.
///
/// Every key is optional here; [`GlobalSettings::from_section`] enforces what
/// the global file requires, and [`GlobalSettings::with_override`] applies
/// whatever a profile sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsSection {
    /// Component identifiers to render.
    pub components: Option<Vec<String>>,
    /// Base name for rendered output files.
    pub generate_file_name: Option<String>,
}

impl SettingsSection {
    /// Reject a `components` key that is present but empty, and a
    /// `generate_file_name` that is not a single file name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] naming `path`.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.components.as_ref().is_some_and(Vec::is_empty) {
            return Err(malformed(path, "'components' list is empty"));
        }
        if let Some(name) = &self.generate_file_name
            && !is_plain_name(name)
        {
            return Err(malformed(
                path,
                &format!("'generate_file_name' must be a plain file name, got '{name}'"),
            ));
        }
        Ok(())
    }
}

impl GlobalSettings {
    /// Build settings from the `[nexus]` table of the global file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if the table or its `components`
    /// list is absent or empty.
    pub fn from_section(path: &Path, section: Option<SettingsSection>) -> Result<Self, ConfigError> {
        let section = section.ok_or_else(|| {
            malformed(path, &format!("missing [{SETTINGS_TABLE}] table"))
        })?;
        section.validate(path)?;

        let components = section.components.ok_or_else(|| {
            malformed(
                path,
                &format!("add a 'components' list under the [{SETTINGS_TABLE}] table"),
            )
        })?;

        Ok(Self {
            components,
            output_base_name: section
                .generate_file_name
                .unwrap_or_else(|| DEFAULT_OUTPUT_BASE_NAME.to_string()),
        })
    }

    /// Apply a profile's own `[nexus]` table: each key it sets replaces the
    /// global value.
    #[must_use]
    pub fn with_override(mut self, section: &SettingsSection) -> Self {
        if let Some(components) = &section.components {
            self.components.clone_from(components);
        }
        if let Some(name) = &section.generate_file_name {
            self.output_base_name.clone_from(name);
        }
        self
    }
}

fn malformed(path: &Path, message: &str) -> ConfigError {
    ConfigError::Malformed {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Load the global settings file.
///
/// # Errors
///
/// - [`ConfigError::NotFound`] if `nexus.toml` does not exist
/// - [`ConfigError::Malformed`] if it is not valid TOML, or the `components`
///   list is absent or empty
pub fn load(paths: &NexusPaths) -> Result<GlobalSettings, ConfigError> {
    let path = paths.settings_file();
    let table = toml_loader::read_table(&path)?.ok_or_else(|| ConfigError::NotFound {
        path: path.clone(),
    })?;
    let section = toml_loader::section(&path, &table, SETTINGS_TABLE)?;
    GlobalSettings::from_section(&path, section)
}
