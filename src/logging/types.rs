//! Core logging types: component entries, status, and the [`Log`] trait.

/// Outcome of one component in a render, for summary reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Component identifier.
    pub name: String,
    /// Final status of the component.
    pub status: RenderStatus,
    /// Optional detail (destination path or error description).
    pub message: Option<String>,
}

/// Status of a processed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Rendered and written to its destination.
    Rendered,
    /// Rendered in dry-run mode; nothing was written.
    DryRun,
    /// Rendering or writing failed; the operation stopped here.
    Failed,
}

/// Abstraction over logging backends.
///
/// The render orchestrator only talks to this trait, so it can be driven by
/// the console [`Logger`](super::logger::Logger) or any other sink.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (suppressed on console unless `--debug`).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a component result for the summary.
    fn record_component(&self, name: &str, status: RenderStatus, message: Option<&str>);
}
