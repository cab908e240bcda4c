//! Component repository: template lookup, output extensions, and writes.
use std::path::PathBuf;

use super::fs;
use crate::config::{NexusPaths, is_plain_name};
use crate::error::ComponentError;

/// Output file extension (without the leading dot) for every supported
/// component.
pub const EXTENSIONS: &[(&str, &str)] = &[
    ("alacritty", "toml"),
    ("kitty", "conf"),
    ("qtile", "py"),
    ("rofi", "rasi"),
];

/// Return the output extension registered for `component`.
///
/// # Errors
///
/// Returns [`ComponentError::Unknown`] if the component is not in [`EXTENSIONS`].
///
/// # Examples
///
/// ```
/// use nexus::resources::component::extension_for;
///
/// assert_eq!(extension_for("kitty").unwrap(), "conf");
/// assert!(extension_for("polybar").is_err());
/// ```
pub fn extension_for(component: &str) -> Result<&'static str, ComponentError> {
    EXTENSIONS
        .iter()
        .find(|(name, _)| *name == component)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| ComponentError::Unknown {
            component: component.to_string(),
        })
}

/// Reads component templates and writes their rendered output.
#[derive(Debug, Clone)]
pub struct ComponentRepository {
    components_dir: PathBuf,
    output_root: PathBuf,
}

impl ComponentRepository {
    /// Create a repository over the template and output locations in `paths`.
    #[must_use]
    pub fn new(paths: &NexusPaths) -> Self {
        Self {
            components_dir: paths.components_dir(),
            output_root: paths.output_root.clone(),
        }
    }

    fn not_found(&self, component: &str) -> ComponentError {
        ComponentError::NotFound {
            component: component.to_string(),
            dir: self.components_dir.clone(),
        }
    }

    /// Load the template for `component` as lines split on `\n`.
    ///
    /// Joining the result with `\n` reproduces the file byte for byte.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::NotFound`] if no template file exists for the component
    /// - [`ComponentError::Io`] if the file exists but cannot be read
    pub fn load_template(&self, component: &str) -> Result<Vec<String>, ComponentError> {
        if !is_plain_name(component) {
            return Err(self.not_found(component));
        }
        let path = self.components_dir.join(component);
        if !path.is_file() {
            return Err(self.not_found(component));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                self.not_found(component)
            } else {
                ComponentError::Io { path, source }
            }
        })?;

        Ok(content.split('\n').map(str::to_string).collect())
    }

    /// Destination of rendered output:
    /// `<output_root>/<component>/<base_name>.<extension>`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Unknown`] if the component has no registered extension.
    pub fn destination(&self, component: &str, base_name: &str) -> Result<PathBuf, ComponentError> {
        let ext = extension_for(component)?;
        Ok(self
            .output_root
            .join(component)
            .join(format!("{base_name}.{ext}")))
    }

    /// Write rendered `content` for `component`, replacing any existing file,
    /// and return the destination path.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::Unknown`] if the component has no registered extension
    /// - [`ComponentError::Io`] if the directory or file cannot be written
    pub fn write(
        &self,
        component: &str,
        base_name: &str,
        content: &str,
    ) -> Result<PathBuf, ComponentError> {
        let path = self.destination(component, base_name)?;
        fs::overwrite(&path, content)?;
        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn repo() -> (tempfile::TempDir, NexusPaths, ComponentRepository) {
        let dir = tempfile::tempdir().unwrap();
        let paths = NexusPaths::new(dir.path().join("nexus"), dir.path().join("config"));
        std::fs::create_dir_all(paths.components_dir()).unwrap();
        let repo = ComponentRepository::new(&paths);
        (dir, paths, repo)
    }

    #[test]
    fn extension_table_has_no_leading_dots() {
        for (name, ext) in EXTENSIONS {
            assert!(!ext.starts_with('.'), "{name} extension has a leading dot");
        }
    }

    #[test]
    fn unknown_component_extension() {
        let err = extension_for("polybar").unwrap_err();
        assert_eq!(crate::error::NexusError::from(err).kind(), ErrorKind::UnknownComponent);
    }

    #[test]
    fn load_template_splits_lines_preserving_trailing_newline() {
        let (_dir, paths, repo) = repo();
        std::fs::write(paths.components_dir().join("kitty"), "a\nb\n").unwrap();
        let lines = repo.load_template("kitty").unwrap();
        assert_eq!(lines, vec!["a", "b", ""]);
        assert_eq!(lines.join("\n"), "a\nb\n");
    }

    #[test]
    fn load_template_missing_file() {
        let (_dir, _paths, repo) = repo();
        let err = repo.load_template("kitty").unwrap_err();
        assert!(matches!(err, ComponentError::NotFound { .. }));
    }

    #[test]
    fn load_template_rejects_paths() {
        let (dir, _paths, repo) = repo();
        std::fs::write(dir.path().join("nexus").join("secret"), "x").unwrap();
        for id in ["../secret", "a/b", "", "."] {
            let err = repo.load_template(id).unwrap_err();
            assert!(matches!(err, ComponentError::NotFound { .. }), "{id:?}");
        }
    }

    #[test]
    fn load_template_directory_is_not_found() {
        let (_dir, paths, repo) = repo();
        std::fs::create_dir(paths.components_dir().join("kitty")).unwrap();
        assert!(matches!(
            repo.load_template("kitty").unwrap_err(),
            ComponentError::NotFound { .. }
        ));
    }

    #[test]
    fn destination_layout() {
        let (dir, _paths, repo) = repo();
        assert_eq!(
            repo.destination("kitty", "nexus").unwrap(),
            dir.path().join("config").join("kitty").join("nexus.conf")
        );
        assert_eq!(
            repo.destination("qtile", "theme").unwrap(),
            dir.path().join("config").join("qtile").join("theme.py")
        );
    }

    #[test]
    fn write_creates_directories_and_overwrites() {
        let (_dir, _paths, repo) = repo();
        let first = repo.write("kitty", "nexus", "old").unwrap();
        let second = repo.write("kitty", "nexus", "new").unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(second).unwrap(), "new");
    }

    #[test]
    fn write_unknown_component_writes_nothing() {
        let (dir, _paths, repo) = repo();
        let err = repo.write("polybar", "nexus", "x").unwrap_err();
        assert!(matches!(err, ComponentError::Unknown { .. }));
        assert!(!dir.path().join("config").join("polybar").exists());
    }
}
