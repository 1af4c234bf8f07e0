//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_typeahead"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn negative_debounce_is_rejected_before_the_terminal_opens() {
    let output = Command::new(env!("CARGO_BIN_EXE_typeahead"))
        .args(["--debounce-ms", "-1", "--config", "/nonexistent/typeahead.toml"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("-1"),
        "Expected the rejected value in stderr, got: {}",
        stderr
    );
}
