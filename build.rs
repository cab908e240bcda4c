//! Embeds the build version as `NEXUS_VERSION`.
use std::path::Path;
use std::process::Command;

/// `v1.2.0-3-gabc` → `1.2.0-3-gabc`; untagged hashes pass through.
fn normalise(describe: &str) -> &str {
    let describe = describe.trim();
    describe
        .strip_prefix('v')
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(describe)
}

fn main() {
    println!("cargo:rerun-if-env-changed=NEXUS_VERSION");

    let version = std::env::var("NEXUS_VERSION").ok().or_else(|| {
        let output = Command::new("git")
            .args(["describe", "--tags", "--always", "--dirty"])
            .output()
            .ok()
            .filter(|o| o.status.success())?;
        Some(normalise(&String::from_utf8_lossy(&output.stdout)).to_string())
    });
    if let Some(version) = version {
        println!("cargo:rustc-env=NEXUS_VERSION={version}");
    }

    if Path::new(".git").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/");
    }
}
