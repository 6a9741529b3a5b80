use std::path::Path;
use std::process::Command;

const HASH_VAR: &str = "HAIRSKETCH_GIT_HASH";

fn main() {
    // Release tarballs have no .git; packagers pass the revision in explicitly.
    println!("cargo:rerun-if-env-changed={HASH_VAR}");
    let revision = std::env::var(HASH_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(git_revision)
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env={HASH_VAR}={revision}");

    for tracked in [".git/HEAD", ".git/index"] {
        if Path::new(tracked).exists() {
            println!("cargo:rerun-if-changed={tracked}");
        }
    }
}

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8(output.stdout).ok()?;
    let revision = revision.trim();
    (!revision.is_empty()).then(|| revision.to_string())
}
