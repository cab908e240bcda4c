//! Profile discovery and loading.
use std::path::{Path, PathBuf};

use super::NexusPaths;
use super::settings::{SETTINGS_TABLE, SettingsSection};
use super::toml_loader;
use super::value::ProfileData;
use crate::error::ConfigError;

/// File extension of profile documents.
const PROFILE_EXTENSION: &str = "toml";

/// A loaded profile.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Identifier the profile was requested by (the file stem).
    pub name: String,
    /// File the profile was read from.
    pub path: PathBuf,
    /// The whole document, including any `[nexus]` table.
    pub data: ProfileData,
    /// The profile's own `[nexus]` table, overriding global settings.
    pub settings: Option<SettingsSection>,
}

/// Enumerate profile documents as `(name, path)` pairs in directory order.
///
/// A missing profiles directory yields no profiles.
fn entries(dir: &Path) -> Result<Vec<(String, PathBuf)>, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_err(e)),
    };

    let mut profiles = Vec::new();
    for entry in read_dir {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(PROFILE_EXTENSION)
        {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        profiles.push((name, path));
    }
    Ok(profiles)
}

/// List the names of all available profiles.
///
/// Order follows the directory enumeration and is not sorted; sort the
/// result if a deterministic order is needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the profiles directory exists but cannot be read.
pub fn list(paths: &NexusPaths) -> Result<Vec<String>, ConfigError> {
    Ok(entries(&paths.profiles_dir())?
        .into_iter()
        .map(|(name, _)| name)
        .collect())
}

/// Load the profile whose name is exactly `name`.
///
/// # Errors
///
/// - [`ConfigError::ProfileNotFound`] if no profile document has that name
/// - [`ConfigError::Malformed`] if the document is not valid TOML, or its
///   `[nexus]` table has the wrong shape or an empty `components` list
/// - [`ConfigError::Io`] if the directory or file cannot be read
pub fn load(name: &str, paths: &NexusPaths) -> Result<Profile, ConfigError> {
    let dir = paths.profiles_dir();
    let not_found = || ConfigError::ProfileNotFound {
        name: name.to_string(),
        dir: dir.clone(),
    };

    let path = entries(&dir)?
        .into_iter()
        .find(|(candidate, _)| candidate == name)
        .map(|(_, path)| path)
        .ok_or_else(not_found)?;

    // The entry can vanish between listing and reading.
    let table = toml_loader::read_table(&path)?.ok_or_else(not_found)?;

    let settings: Option<SettingsSection> =
        toml_loader::section(&path, &table, SETTINGS_TABLE)?;
    if let Some(section) = &settings {
        section.validate(&path)?;
    }

    Ok(Profile {
        name: name.to_string(),
        path,
        data: ProfileData::from(table),
        settings,
    })
}
