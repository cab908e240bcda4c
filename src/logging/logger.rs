//! Structured logger with dry-run awareness and summary collection.
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{ComponentEntry, Log, RenderStatus};
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Console logger that also collects per-component results for the summary.
///
/// Messages are emitted as [`tracing`] events; the subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber) renders them to
/// the console and appends them to `$XDG_CACHE_HOME/nexus/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    components: RefCell<Vec<ComponentEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a logger for `command`, remembering its log file location for
    /// the summary.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self::with_log_file(log_file_path(command))
    }

    /// Create a logger that reports `log_file` (if any) in the summary.
    #[must_use]
    pub const fn with_log_file(log_file: Option<PathBuf>) -> Self {
        Self {
            components: RefCell::new(Vec::new()),
            log_file,
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub fn log_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless `--debug`; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a component result for the summary.
    pub fn record_component(&self, name: &str, status: RenderStatus, message: Option<&str>) {
        self.components.borrow_mut().push(ComponentEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }

    /// Return a copy of all recorded component entries, in record order.
    #[must_use]
    pub fn component_entries(&self) -> Vec<ComponentEntry> {
        self.components.borrow().clone()
    }

    /// Count the number of failed components.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.components
            .borrow()
            .iter()
            .filter(|c| c.status == RenderStatus::Failed)
            .count()
    }

    /// Print the summary of all recorded components.
    pub fn print_summary(&self) {
        let components = self.component_entries();
        if components.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut rendered = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;

        for component in &components {
            let (icon, color) = match component.status {
                RenderStatus::Rendered => {
                    rendered += 1;
                    ("✓", "\x1b[32m")
                }
                RenderStatus::DryRun => {
                    dry_run += 1;
                    ("~", "\x1b[37m")
                }
                RenderStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = component
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" → {msg}"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", component.name));
        }

        let total = rendered + dry_run + failed;
        self.info(&format!(
            "{total} components: \x1b[32m{rendered} rendered\x1b[0m, \x1b[37m{dry_run} dry-run\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_component(&self, name: &str, status: RenderStatus, message: Option<&str>) {
        self.record_component(name, status, message);
    }
}
