//! Component repository: template files in, rendered config files out.
pub mod component;
pub mod fs;

pub use component::{ComponentRepository, EXTENSIONS, extension_for};
