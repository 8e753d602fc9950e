use std::process::Command;

/// Exposes the nearest release tag as `GIT_TAG` for the version label.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let tag = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty());

    if let Some(tag) = tag {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
