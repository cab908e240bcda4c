//! Domain-specific error types for the templating engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! The configuration store, component repository and template resolver
//! return their own typed errors; the render orchestrator aggregates them
//! into [`NexusError`], and command handlers at the CLI boundary convert that
//! to [`anyhow::Error`] via the standard `?` operator.
//!
//! Each `Display` message describes only its own layer; causes are reached
//! through [`std::error::Error::source`], so printing the chain (anyhow's
//! `{:#}` or [`NexusError::report`]) names every cause exactly once.
//!
//! # Error hierarchy
//!
//! ```text
//! NexusError
//! ├── Config(ConfigError)         # settings and profile loading
//! ├── Component(ComponentError)   # template lookup, extension table, output writes
//! └── Render { .. TemplateError }  # placeholder resolution, tagged with component + profile
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of every failure the engine can report.
///
/// Lets callers (and tests) branch on the failure category without matching
/// on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The global settings file does not exist.
    ConfigNotFound,
    /// No profile with the requested name exists.
    ProfileNotFound,
    /// A settings or profile file exists but is structurally invalid.
    ConfigMalformed,
    /// A configured component has no template file.
    ComponentNotFound,
    /// A component has no registered output extension.
    UnknownComponent,
    /// A template placeholder does not resolve against the profile data.
    PlaceholderUnresolved,
    /// Any other filesystem failure.
    Io,
}

/// Top-level error type for the templating engine.
#[derive(Error, Debug)]
pub enum NexusError {
    /// Settings or profile loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Template lookup or output writing failed.
    #[error(transparent)]
    Component(#[from] ComponentError),

    /// A component template could not be rendered from a profile.
    #[error("could not render component '{component}' with profile '{profile}'")]
    Render {
        /// Component whose template failed.
        component: String,
        /// Profile the template was rendered against.
        profile: String,
        /// Underlying resolver failure.
        source: TemplateError,
    },
}

impl NexusError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(e) => e.kind(),
            Self::Component(e) => e.kind(),
            Self::Render { .. } => ErrorKind::PlaceholderUnresolved,
        }
    }

    /// This error and all of its causes, joined with `": "`.
    #[must_use]
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

/// Errors that arise from loading global settings and profiles.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The global settings file is absent.
    #[error("settings file not found: {}", path.display())]
    NotFound {
        /// Expected location of the settings file.
        path: PathBuf,
    },

    /// No profile file matches the requested name.
    #[error("profile '{name}' not found in {}", dir.display())]
    ProfileNotFound {
        /// Requested profile name.
        name: String,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// The file exists but is not valid TOML or lacks required structure.
    #[error("malformed config {}: {message}", path.display())]
    Malformed {
        /// File that failed to parse or validate.
        path: PathBuf,
        /// Human-readable description of the problem.
        message: String,
    },

    /// An I/O error occurred while reading a config file or directory.
    #[error("IO error reading {}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::ConfigNotFound,
            Self::ProfileNotFound { .. } => ErrorKind::ProfileNotFound,
            Self::Malformed { .. } => ErrorKind::ConfigMalformed,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Errors that arise from the component repository.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// No template file exists for the component.
    #[error("component '{component}' not found in {}", dir.display())]
    NotFound {
        /// Component identifier.
        component: String,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// The component has no entry in the extension table.
    #[error("no output extension registered for component '{component}'")]
    Unknown {
        /// Component identifier.
        component: String,
    },

    /// Reading a template or writing rendered output failed.
    #[error("IO error at {}", path.display())]
    Io {
        /// Path that could not be read or written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ComponentError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::ComponentNotFound,
            Self::Unknown { .. } => ErrorKind::UnknownComponent,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Errors that arise while substituting placeholders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `<<dotted.path>>` marker does not resolve to a scalar.
    #[error("placeholder '<<{placeholder}>>' is unresolved")]
    PlaceholderUnresolved {
        /// Dotted path as written between the markers.
        placeholder: String,
        /// Where the walk through the profile data stopped.
        source: PathError,
    },
}

/// Reasons a dotted path fails to reach a scalar in the profile data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A table along the path lacks the key.
    #[error("key '{key}' not found")]
    MissingKey {
        /// Segment that was looked up.
        key: String,
    },

    /// A value along the path is not a table, so `key` cannot be looked up in it.
    #[error("cannot look up '{key}' in a value that is not a table")]
    NotAMapping {
        /// Segment that was looked up.
        key: String,
    },

    /// The path ends on a table or array rather than a single value.
    #[error("path ends on a table or array, not a value")]
    NotAScalar,
}
