//! Configuration store: locating and parsing global settings and profiles.
pub mod profiles;
pub mod settings;
pub mod toml_loader;
pub mod value;

use std::path::{Component, Path, PathBuf};

/// File name of the global settings document inside the nexus directory.
pub const SETTINGS_FILE: &str = "nexus.toml";

/// Directory (under the nexus directory) holding component templates.
pub const COMPONENTS_DIR: &str = "components";

/// Directory (under the nexus directory) holding profile documents.
pub const PROFILES_DIR: &str = "profiles";

/// Filesystem roots used by a single nexus invocation.
///
/// Passed explicitly to the configuration store and component repository so
/// that nothing reads process-wide path state.
///
/// # Examples
///
/// ```
/// use nexus::config::NexusPaths;
///
/// let paths = NexusPaths::new("/home/me/.config/nexus", "/home/me/.config");
/// assert!(paths.settings_file().ends_with("nexus/nexus.toml"));
/// assert!(paths.profiles_dir().ends_with("nexus/profiles"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexusPaths {
    /// Directory containing `nexus.toml`, `components/` and `profiles/`.
    pub nexus_dir: PathBuf,
    /// Directory under which rendered output is written, one subdirectory per component.
    pub output_root: PathBuf,
}

impl NexusPaths {
    /// Build a path set from explicit roots.
    #[must_use]
    pub fn new(nexus_dir: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            nexus_dir: nexus_dir.into(),
            output_root: output_root.into(),
        }
    }

    /// Default layout rooted at a user configuration directory:
    /// `<config_home>/nexus` for inputs and `<config_home>` for output.
    #[must_use]
    pub fn under(config_home: &Path) -> Self {
        Self::new(config_home.join("nexus"), config_home)
    }

    /// Location of the global settings document.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.nexus_dir.join(SETTINGS_FILE)
    }

    /// Directory holding one template file per component.
    #[must_use]
    pub fn components_dir(&self) -> PathBuf {
        self.nexus_dir.join(COMPONENTS_DIR)
    }

    /// Directory holding one TOML document per profile.
    #[must_use]
    pub fn profiles_dir(&self) -> PathBuf {
        self.nexus_dir.join(PROFILES_DIR)
    }
}

/// Return the user configuration directory: `$XDG_CONFIG_HOME` when set,
/// otherwise `~/.config`.
#[must_use]
pub fn config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// Whether `name` is a single normal path component, so that joining it onto
/// a directory can never leave that directory.
///
/// # Examples
///
/// ```
/// use nexus::config::is_plain_name;
///
/// assert!(is_plain_name("kitty"));
/// assert!(!is_plain_name("../kitty"));
/// assert!(!is_plain_name("a/b"));
/// assert!(!is_plain_name(""));
/// ```
#[must_use]
pub fn is_plain_name(name: &str) -> bool {
    let mut parts = Path::new(name).components();
    matches!(
        (parts.next(), parts.next()),
        (Some(Component::Normal(_)), None)
    )
}
