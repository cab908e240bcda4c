//! Command: print version information.

/// Build version: `NEXUS_VERSION` from the build script, else the package version.
#[must_use]
pub const fn version() -> &'static str {
    match option_env!("NEXUS_VERSION") {
        Some(version) => version,
        None => env!("CARGO_PKG_VERSION"),
    }
}

/// Print the nexus version to stdout.
pub fn run() {
    println!("nexus {}", version());
}
