use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // rust-embed bakes these into the binary
    println!("cargo:rerun-if-changed=assets");

    let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    else {
        return;
    };
    if !output.status.success() {
        return;
    }
    if let Ok(tag) = String::from_utf8(output.stdout) {
        let tag = tag.trim();
        if !tag.is_empty() {
            println!("cargo:rustc-env=GIT_TAG={tag}");
        }
    }
}
