//! TOML document loading shared by the settings and profile loaders.
use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;

use crate::error::ConfigError;

/// Read and parse a TOML document.
///
/// Returns `Ok(None)` when the file does not exist so that each caller can
/// decide which "not found" error applies.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if the file is not UTF-8 text or not
/// valid TOML, and [`ConfigError::Io`] if it exists but cannot be read.
pub fn read_table(path: &Path) -> Result<Option<toml::Table>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(ConfigError::Malformed {
                path: path.to_path_buf(),
                message: "not valid UTF-8".to_string(),
            });
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
}

/// Deserialize the top-level table `key` of a parsed document, if present.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if the value under `key` does not have
/// the shape of `T`.
pub fn section<T: DeserializeOwned>(
    path: &Path,
    table: &toml::Table,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    table
        .get(key)
        .cloned()
        .map(|value| {
            value.try_into().map_err(|e: toml::de::Error| ConfigError::Malformed {
                path: path.to_path_buf(),
                message: format!("[{key}]: {}", e.message()),
            })
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{NexusPaths, profiles, settings};
    use crate::error::ErrorKind;

    #[derive(Debug, serde::Deserialize)]
    struct Section {
        name: String,
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_table(&dir.path().join("absent.toml")).unwrap().is_none());
    }

    #[test]
    fn invalid_toml_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[nexus\ncomponents = ").unwrap();
        let err = read_table(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigMalformed);
    }

    #[test]
    fn non_utf8_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, b"a = \"\xff\xfe\"\n").unwrap();
        let err = read_table(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigMalformed);
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }

    #[test]
    fn non_utf8_settings_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let paths = NexusPaths::new(dir.path(), dir.path().join("out"));
        std::fs::write(paths.settings_file(), b"[nexus]\ncomponents = [\"\xff\"]\n").unwrap();
        let err = settings::load(&paths).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigMalformed);
    }

    #[test]
    fn non_utf8_profile_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let paths = NexusPaths::new(dir.path(), dir.path().join("out"));
        std::fs::create_dir_all(paths.profiles_dir()).unwrap();
        std::fs::write(paths.profiles_dir().join("bad.toml"), b"a = \"\xff\xfe\"\n").unwrap();
        let err = profiles::load("bad", &paths).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigMalformed);
    }

    #[test]
    fn section_deserializes_present_key() {
        let table: toml::Table = toml::from_str("[a]\nname = \"x\"\n").unwrap();
        let section: Option<Section> = section(Path::new("t.toml"), &table, "a").unwrap();
        assert_eq!(section.unwrap().name, "x");
    }

    #[test]
    fn section_absent_key_is_none() {
        let table = toml::Table::new();
        let section: Option<Section> = section(Path::new("t.toml"), &table, "a").unwrap();
        assert!(section.is_none());
    }

    #[test]
    fn section_wrong_shape_is_malformed() {
        let table: toml::Table = toml::from_str("a = 3\n").unwrap();
        let err = section::<Section>(Path::new("t.toml"), &table, "a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigMalformed);
        assert!(err.to_string().contains("[a]"));
    }
}
