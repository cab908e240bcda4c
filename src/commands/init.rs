//! Command: create the nexus directory layout.
use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::resources::fs::ensure_dir;

/// Create the nexus directory with its `components/` and `profiles/`
/// subdirectories. Existing directories and their contents are left alone.
///
/// # Errors
///
/// Returns an error if the paths cannot be resolved or a directory cannot
/// be created.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let paths = super::resolve_paths(global)?;

    log.stage("Initialising nexus directory");
    for dir in [paths.nexus_dir.clone(), paths.components_dir(), paths.profiles_dir()] {
        let created = ensure_dir(&dir)
            .with_context(|| format!("failed to initialise {}", paths.nexus_dir.display()))?;
        if created {
            log.info(&format!("created {}", dir.display()));
        } else {
            log.debug(&format!("already exists: {}", dir.display()));
        }
    }

    if !paths.settings_file().exists() {
        log.warn(&format!(
            "no settings file yet: create {} with a [nexus] components list",
            paths.settings_file().display()
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn creates_layout_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nexus = dir.path().join("nexus");
        let global = GlobalOpts {
            root: Some(nexus.clone()),
            output_root: Some(dir.path().to_path_buf()),
        };
        let log = Logger::with_log_file(None);

        run(&global, &log).unwrap();
        assert!(nexus.join("components").is_dir());
        assert!(nexus.join("profiles").is_dir());

        fs::write(nexus.join("profiles/dark.toml"), "").unwrap();
        run(&global, &log).unwrap();
        assert!(nexus.join("profiles/dark.toml").is_file());
    }
}
