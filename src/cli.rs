//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the nexus templating tool.
#[derive(Parser, Debug)]
#[command(
    name = "nexus",
    about = "Render application config files from a named profile",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Filesystem roots shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Override the nexus directory (settings, components, profiles)
    #[arg(long, global = true, env = "NEXUS_ROOT")]
    pub root: Option<PathBuf>,

    /// Override the directory rendered files are written under
    #[arg(long, global = true)]
    pub output_root: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available profiles
    List,
    /// Render every configured component from a profile
    Load(LoadOpts),
    /// Create the nexus directory layout
    Init,
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Load(_) => "load",
            Self::Init => "init",
            Self::Version => "version",
        }
    }
}

/// Options for the `load` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct LoadOpts {
    /// Profile to render
    pub profile: String,

    /// Preview destinations without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
