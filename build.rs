use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=MPSSH_VERSION");

    let version = std::env::var("MPSSH_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=MPSSH_VERSION={version}");

    let hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=MPSSH_BUILD_HASH={hash}");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
