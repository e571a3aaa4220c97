//! Command-line behavior that does not depend on the PNG codec.

use placeholder_assets::crate_root;
use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_generate_placeholders"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_help_names_build_tree_paths() {
    let output = run(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE:"));
    assert!(stdout.contains("PATHS:"));
    assert!(stdout.contains(&crate_root().display().to_string()));
    assert!(stdout.contains("PLACEHOLDER_ASSETS_OUT_DIR"));
}

#[test]
fn test_unknown_command_exits_with_error() {
    let output = run(&["bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command 'bogus'"));
}

#[test]
fn test_config_flag_requires_path() {
    let output = run(&["--config"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'--config' requires a path"));
}
