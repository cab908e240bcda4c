//! Command: render a profile.
use anyhow::{Context as _, Result};

use crate::cli::{GlobalOpts, LoadOpts};
use crate::logging::Logger;
use crate::render::Renderer;

/// Run the load command.
///
/// The summary is printed whether or not rendering succeeded, so components
/// written before a failure are still reported.
///
/// # Errors
///
/// Returns an error if the paths cannot be resolved or any step of the
/// render fails.
pub fn run(global: &GlobalOpts, opts: &LoadOpts, log: &Logger) -> Result<()> {
    let paths = super::resolve_paths(global)?;
    log.info(&format!("nexus {}", super::version::version()));
    log.debug(&format!("nexus directory: {}", paths.nexus_dir.display()));
    log.debug(&format!("output root: {}", paths.output_root.display()));

    let result = Renderer::new(&paths)
        .dry_run(opts.dry_run)
        .render_profile(&opts.profile, log);

    log.print_summary();

    let report = result.with_context(|| format!("failed to load profile '{}'", opts.profile))?;
    if report.dry_run {
        log.info(&format!(
            "dry run: {} component(s) would be rendered from '{}'",
            report.outputs.len(),
            report.profile
        ));
    } else {
        log.info(&format!(
            "rendered {} component(s) from '{}'",
            report.outputs.len(),
            report.profile
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, NexusError};
    use std::fs;

    #[test]
    fn failure_is_wrapped_with_profile_name() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOpts {
            root: Some(dir.path().join("nexus")),
            output_root: Some(dir.path().join("out")),
        };
        let opts = LoadOpts {
            profile: "missing".to_string(),
            dry_run: false,
        };
        let log = Logger::with_log_file(None);

        let err = run(&global, &opts, &log).unwrap_err();
        assert_eq!(err.to_string(), "failed to load profile 'missing'");
        let kind = err.downcast_ref::<NexusError>().map(NexusError::kind);
        assert_eq!(kind, Some(ErrorKind::ProfileNotFound));
    }

    #[test]
    fn renders_and_records_summary() {
        let dir = tempfile::tempdir().unwrap();
        let nexus = dir.path().join("nexus");
        fs::create_dir_all(nexus.join("components")).unwrap();
        fs::create_dir_all(nexus.join("profiles")).unwrap();
        fs::write(nexus.join("nexus.toml"), "[nexus]\ncomponents = [\"rofi\"]\n").unwrap();
        fs::write(nexus.join("profiles/p.toml"), "[font]\nsize = 11\n").unwrap();
        fs::write(nexus.join("components/rofi"), "font-size: <<font.size>>;").unwrap();

        let global = GlobalOpts {
            root: Some(nexus),
            output_root: Some(dir.path().join("out")),
        };
        let opts = LoadOpts {
            profile: "p".to_string(),
            dry_run: false,
        };
        let log = Logger::with_log_file(None);
        run(&global, &opts, &log).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("out/rofi/nexus.rasi")).unwrap(),
            "font-size: 11;"
        );
        assert_eq!(log.component_entries().len(), 1);
        assert_eq!(log.failure_count(), 0);
    }
}
