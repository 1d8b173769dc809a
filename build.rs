use std::process::Command;

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/heads");

    println!(
        "cargo::rustc-env=VCS_REF_HEAD_REVISION={}",
        git(&["rev-parse", "HEAD"])
    );
    println!(
        "cargo::rustc-env=VCS_REF_HEAD_NAME={}",
        git(&["rev-parse", "--abbrev-ref", "HEAD"])
    );
}
