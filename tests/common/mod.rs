// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed nexus layout and a fluent builder so
// each integration test can set up an isolated environment without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use nexus::config::NexusPaths;
use nexus::error::NexusError;
use nexus::logging::Logger;
use nexus::render::{RenderReport, Renderer};

/// Create the empty nexus layout under `nexus_dir`:
///
/// - `components/` (one template per component)
/// - `profiles/`   (one TOML document per profile)
pub fn setup_minimal_layout(nexus_dir: &Path) {
    std::fs::create_dir_all(nexus_dir.join("components")).expect("create components dir");
    std::fs::create_dir_all(nexus_dir.join("profiles")).expect("create profiles dir");
}

/// An isolated nexus directory and output root backed by a
/// [`tempfile::TempDir`], deleted when dropped.
pub struct NexusContext {
    /// Temporary directory holding both roots.
    pub dir: tempfile::TempDir,
    /// Roots handed to the library.
    pub paths: NexusPaths,
}

impl NexusContext {
    /// Create a context with empty `components/` and `profiles/` directories
    /// and no settings file.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let paths = NexusPaths::new(dir.path().join("nexus"), dir.path().join("config"));
        setup_minimal_layout(&paths.nexus_dir);
        Self { dir, paths }
    }

    /// Path a component's output lands at for a given file name.
    pub fn output(&self, component: &str, file_name: &str) -> PathBuf {
        self.paths.output_root.join(component).join(file_name)
    }

    /// Read a rendered output file.
    pub fn read_output(&self, component: &str, file_name: &str) -> String {
        std::fs::read_to_string(self.output(component, file_name)).expect("read output")
    }

    /// Render `profile`, returning the report together with the logger that
    /// collected the per-component summary.
    pub fn render(&self, profile: &str) -> (Result<RenderReport, NexusError>, Logger) {
        let log = Logger::with_log_file(None);
        let result = Renderer::new(&self.paths).render_profile(profile, &log);
        (result, log)
    }

    /// Render `profile` without writing.
    pub fn render_dry_run(&self, profile: &str) -> (Result<RenderReport, NexusError>, Logger) {
        let log = Logger::with_log_file(None);
        let result = Renderer::new(&self.paths)
            .dry_run(true)
            .render_profile(profile, &log);
        (result, log)
    }
}

/// Fluent builder for [`NexusContext`].
pub struct NexusFixture {
    ctx: NexusContext,
}

impl NexusFixture {
    /// Begin building a new context backed by an empty layout.
    pub fn new() -> Self {
        Self {
            ctx: NexusContext::new(),
        }
    }

    /// Write `nexus.toml` with a `[nexus]` table listing `components`.
    pub fn with_components(self, components: &[&str]) -> Self {
        let list = components
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", ");
        self.with_settings(&format!("[nexus]\ncomponents = [{list}]\n"))
    }

    /// Write `content` verbatim as `nexus.toml`.
    pub fn with_settings(self, content: &str) -> Self {
        std::fs::write(self.ctx.paths.settings_file(), content).expect("write settings");
        self
    }

    /// Write `profiles/<name>.toml`.
    pub fn with_profile(self, name: &str, content: &str) -> Self {
        let path = self.ctx.paths.profiles_dir().join(format!("{name}.toml"));
        std::fs::write(path, content).expect("write profile");
        self
    }

    /// Write `components/<name>`.
    pub fn with_template(self, name: &str, content: &str) -> Self {
        let path = self.ctx.paths.components_dir().join(name);
        std::fs::write(path, content).expect("write template");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> NexusContext {
        self.ctx
    }
}
