//! Profile-driven dotfiles templating engine.
//!
//! A *profile* is a TOML document of nested values (colours, fonts, paths).
//! A *component* is a template for one application's config file containing
//! `<<dotted.path>>` placeholders. Rendering a profile substitutes its values
//! into every configured component and writes the results under the user's
//! configuration directory.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: paths, global settings, profiles and the profile value tree
//! - **[`resources`]**: component templates, the extension table, output writing
//! - **[`template`]**: placeholder resolution
//! - **[`render`]**: the per-profile render pipeline
//! - **[`commands`]**: top-level subcommand orchestration (`list`, `load`, `init`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod resources;
pub mod template;
