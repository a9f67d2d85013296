use std::process::Command;

fn main() {
    if let Ok(target) = std::env::var("TARGET") {
        println!("cargo:rustc-env=RIDERWIRE_BUILD_TARGET={target}");
    }
    println!("cargo:rerun-if-env-changed=TARGET");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(version) = command_output(Command::new(rustc).arg("--version")) {
        println!("cargo:rustc-env=RIDERWIRE_RUSTC_VERSION={version}");
    }

    // Absent outside a git checkout (e.g. a published crate).
    let mut git = Command::new("git");
    git.args(["rev-parse", "--short", "HEAD"]);
    if let Some(hash) = command_output(&mut git) {
        println!("cargo:rustc-env=RIDERWIRE_GIT_HASH={hash}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}

fn command_output(command: &mut Command) -> Option<String> {
    let output = command.output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
