//! Command: list available profiles.
use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::render::Renderer;

/// Print every profile name, one per line, in directory order.
///
/// An empty or missing profiles directory is not an error.
///
/// # Errors
///
/// Returns an error if the paths cannot be resolved or the profiles
/// directory cannot be read.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let paths = super::resolve_paths(global)?;
    log.debug(&format!("profiles directory: {}", paths.profiles_dir().display()));

    let names = Renderer::new(&paths)
        .list_profiles()
        .context("failed to list profiles")?;

    log.stage("Profiles");
    if names.is_empty() {
        log.info(&format!("no profiles in {}", paths.profiles_dir().display()));
        return Ok(());
    }
    for name in &names {
        println!("{name}");
    }
    Ok(())
}
