//! Render orchestrator: profile + settings + templates → config files.
//!
//! A render is one linear pass with no retries and no persisted state:
//!
//! 1. load the profile
//! 2. load global settings and apply the profile's own `[nexus]` overrides
//! 3. for each configured component, in order: load its template, resolve
//!    its output extension, render, write
//!
//! The first error aborts the remaining components. Components written
//! before the failure stay on disk.
use std::path::PathBuf;

use crate::config::{NexusPaths, profiles, settings};
use crate::error::NexusError;
use crate::logging::{Log, RenderStatus};
use crate::resources::ComponentRepository;
use crate::template;

/// One component's rendered output and where it landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Component identifier.
    pub component: String,
    /// Destination file (not written in dry-run mode).
    pub destination: PathBuf,
}

/// Result of a successful render operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Profile that was rendered.
    pub profile: String,
    /// Outputs in the order they were produced.
    pub outputs: Vec<RenderedOutput>,
    /// Whether writes were suppressed.
    pub dry_run: bool,
}

/// Drives the configuration store, component repository and template
/// resolver for a single invocation.
#[derive(Debug)]
pub struct Renderer<'a> {
    paths: &'a NexusPaths,
    repo: ComponentRepository,
    dry_run: bool,
}

impl<'a> Renderer<'a> {
    /// Create a renderer over `paths` that writes output.
    #[must_use]
    pub fn new(paths: &'a NexusPaths) -> Self {
        Self {
            paths,
            repo: ComponentRepository::new(paths),
            dry_run: false,
        }
    }

    /// Render and report destinations without writing anything.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// List available profile names in directory order.
    ///
    /// # Errors
    ///
    /// Returns an error if the profiles directory exists but cannot be read.
    pub fn list_profiles(&self) -> Result<Vec<String>, NexusError> {
        Ok(profiles::list(self.paths)?)
    }

    /// Render every configured component from the profile `name`.
    ///
    /// # Errors
    ///
    /// - profile or settings loading failures, before anything is written
    /// - [`ComponentError::NotFound`](crate::error::ComponentError::NotFound) /
    ///   [`ComponentError::Unknown`](crate::error::ComponentError::Unknown) for a
    ///   component without a template or extension
    /// - [`NexusError::Render`] when a placeholder does not resolve
    /// - I/O failures writing output
    pub fn render_profile(&self, name: &str, log: &dyn Log) -> Result<RenderReport, NexusError> {
        log.stage("Loading profile");
        let profile = profiles::load(name, self.paths)?;
        log.info(&format!("profile: {} ({})", profile.name, profile.path.display()));

        log.stage("Loading settings");
        let mut settings = settings::load(self.paths)?;
        if let Some(section) = &profile.settings {
            log.debug(&format!("profile '{name}' overrides global settings"));
            settings = settings.with_override(section);
        }
        log.debug(&format!(
            "profile '{name}' renders components: {}",
            settings.components.join(", ")
        ));

        log.stage("Rendering components");
        let mut outputs = Vec::with_capacity(settings.components.len());
        for component in &settings.components {
            match self.render_component(component, &profile, &settings.output_base_name, log) {
                Ok(destination) => {
                    let status = if self.dry_run {
                        RenderStatus::DryRun
                    } else {
                        RenderStatus::Rendered
                    };
                    log.record_component(
                        component,
                        status,
                        Some(&destination.display().to_string()),
                    );
                    outputs.push(RenderedOutput {
                        component: component.clone(),
                        destination,
                    });
                }
                Err(e) => {
                    log.record_component(component, RenderStatus::Failed, Some(&e.report()));
                    return Err(e);
                }
            }
        }

        Ok(RenderReport {
            profile: profile.name,
            outputs,
            dry_run: self.dry_run,
        })
    }

    fn render_component(
        &self,
        component: &str,
        profile: &profiles::Profile,
        base_name: &str,
        log: &dyn Log,
    ) -> Result<PathBuf, NexusError> {
        log.debug(&format!("updating component '{component}'"));

        let lines = self.repo.load_template(component)?;
        // Extension is checked before rendering so an unregistered component
        // never reaches the writer.
        let destination = self.repo.destination(component, base_name)?;

        let content = template::render_template(&lines, &profile.data).map_err(|source| {
            NexusError::Render {
                component: component.to_string(),
                profile: profile.name.clone(),
                source,
            }
        })?;

        if self.dry_run {
            log.dry_run(&format!("would write {}", destination.display()));
            return Ok(destination);
        }

        let written = self.repo.write(component, base_name, &content)?;
        log.info(&format!("updated '{component}' at {}", written.display()));
        Ok(written)
    }
}
