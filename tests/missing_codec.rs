//! Behavior when built without the PNG codec:
//! `cargo test --no-default-features`

#![cfg(not(feature = "png"))]

use placeholder_assets::{LAND_MASK_FILE, MAP_IMAGE_FILE, OUTPUT_DIR_ENV};
use std::process::Command;

#[test]
fn test_binary_reports_remedy_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("assets");

    let output = Command::new(env!("CARGO_BIN_EXE_generate_placeholders"))
        .env(OUTPUT_DIR_ENV, &target)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PNG encoding support not found"));
    assert!(stdout.contains("cargo run --features png"));
    assert!(stdout.contains("generate-map-assets.html"));

    assert!(!target.join(MAP_IMAGE_FILE).exists());
    assert!(!target.join(LAND_MASK_FILE).exists());
}
