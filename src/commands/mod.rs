//! Top-level subcommand orchestration.
//!
//! Commands are the only layer that turns library errors into `anyhow`
//! reports; everything below them returns typed errors.
pub mod init;
pub mod list;
pub mod load;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::{self, NexusPaths};

/// Resolve the filesystem roots for this invocation.
///
/// `--root` (or `NEXUS_ROOT`) and `--output-root` take precedence; anything
/// not given explicitly is derived from the user configuration directory.
///
/// # Errors
///
/// Returns an error if a root is not given explicitly and the user
/// configuration directory cannot be determined.
pub fn resolve_paths(global: &GlobalOpts) -> Result<NexusPaths> {
    resolve_paths_with(global, config::config_home())
}

fn resolve_paths_with(global: &GlobalOpts, config_home: Option<PathBuf>) -> Result<NexusPaths> {
    if let (Some(root), Some(output_root)) = (&global.root, &global.output_root) {
        return Ok(NexusPaths::new(root, output_root));
    }

    let Some(home) = config_home else {
        anyhow::bail!(
            "cannot determine configuration directory. Use --root and --output-root or set XDG_CONFIG_HOME"
        );
    };

    let defaults = NexusPaths::under(&home);
    Ok(NexusPaths::new(
        global.root.clone().unwrap_or(defaults.nexus_dir),
        global.output_root.clone().unwrap_or(defaults.output_root),
    ))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn opts(root: Option<&str>, output_root: Option<&str>) -> GlobalOpts {
        GlobalOpts {
            root: root.map(PathBuf::from),
            output_root: output_root.map(PathBuf::from),
        }
    }

    #[test]
    fn defaults_derive_from_config_home() {
        let paths = resolve_paths_with(&opts(None, None), Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(paths, NexusPaths::new("/cfg/nexus", "/cfg"));
    }

    #[test]
    fn explicit_root_wins() {
        let paths =
            resolve_paths_with(&opts(Some("/n"), None), Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(paths, NexusPaths::new("/n", "/cfg"));
    }

    #[test]
    fn explicit_roots_need_no_config_home() {
        let paths = resolve_paths_with(&opts(Some("/n"), Some("/out")), None).unwrap();
        assert_eq!(paths, NexusPaths::new("/n", "/out"));
    }

    #[test]
    fn missing_config_home_is_an_error() {
        let err = resolve_paths_with(&opts(Some("/n"), None), None).unwrap_err();
        assert!(err.to_string().contains("cannot determine configuration directory"));
    }
}
