// Integration tests for the tagnet binary

use std::fs;
use std::process::Command;

fn tagnet() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tagnet"));
    cmd.env_remove("TAGNET_OBJECT_ENDPOINT");
    cmd
}

#[test]
fn test_version_display() {
    let output = tagnet()
        .arg("--version")
        .output()
        .expect("Failed to run tagnet --version");

    assert!(output.status.success(), "Version command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tagnet"), "Expected 'tagnet' in version output");
}

#[test]
fn test_help_display() {
    let output = tagnet()
        .arg("--help")
        .output()
        .expect("Failed to run tagnet --help");

    assert!(output.status.success(), "Help command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("raw") && stdout.contains("pairs") && stdout.contains("derive"),
        "Expected raw, pairs and derive in help output"
    );
}

#[test]
fn test_derive_from_raw_dump() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw_medieval_art_tags.json");
    let csv = dir.path().join("processed").join("pairs.csv");
    let report = dir.path().join("processed").join("report.txt");
    fs::write(
        &raw,
        r#"{"464":["Lions","Saints"],"470":["Saints","Lions","Crosses"],"471":["Horses"]}"#,
    )
    .unwrap();

    let output = tagnet()
        .args(["derive", "-i"])
        .arg(&raw)
        .arg("--csv")
        .arg(&csv)
        .arg("--report")
        .arg(&report)
        .arg("--create-dirs")
        .output()
        .expect("Failed to run tagnet derive");

    assert!(output.status.success(), "Derive command failed");
    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "Source,Target,Weight\nCrosses,Lions,1\nCrosses,Saints,1\nLions,Saints,2\n"
    );
    assert_eq!(
        fs::read_to_string(&report).unwrap(),
        "Total objects: 3\nTotal pairs: 4\nFailed objects: 0"
    );
}

#[test]
fn test_derive_refuses_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw.json");
    let csv = dir.path().join("missing").join("pairs.csv");
    fs::write(&raw, r#"{"1":["A","B"]}"#).unwrap();

    let output = tagnet()
        .args(["derive", "-i"])
        .arg(&raw)
        .arg("--csv")
        .arg(&csv)
        .output()
        .expect("Failed to run tagnet derive");

    assert!(!output.status.success(), "Expected derive to fail");
    assert!(!csv.exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_pairs_without_object_endpoint_fails() {
    let output = tagnet()
        .args(["pairs", "-c", "http://127.0.0.1:9/objects"])
        .output()
        .expect("Failed to run tagnet pairs");

    assert!(!output.status.success(), "Expected pairs to fail");
    assert!(String::from_utf8_lossy(&output.stderr).contains("object endpoint must be provided"));
}
