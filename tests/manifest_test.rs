use std::fs;

use seedling::logger::Reporter;
use seedling::manifest::merge_scripts;
use tempfile::TempDir;

fn read_manifest(dir: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(dir.join("package.json")).unwrap()).unwrap()
}

#[test]
fn test_creates_manifest_when_absent() {
    let target = TempDir::new().unwrap();
    merge_scripts(target.path(), &Reporter::new(true)).unwrap();

    let manifest = read_manifest(target.path());
    assert_eq!(manifest["scripts"]["yyl:d"], "yyl watch --silent");
    assert_eq!(manifest["scripts"]["yyl:0"], "yyl all --silent");
}

#[test]
fn test_existing_entries_win_on_collision() {
    let target = TempDir::new().unwrap();
    fs::write(
        target.path().join("package.json"),
        r#"{"name": "demo", "scripts": {"yyl:d": "custom"}}"#,
    )
    .unwrap();

    merge_scripts(target.path(), &Reporter::new(true)).unwrap();

    let manifest = read_manifest(target.path());
    assert_eq!(manifest["name"], "demo");
    assert_eq!(manifest["scripts"]["yyl:d"], "custom");
    assert_eq!(manifest["scripts"]["yyl:0"], "yyl all --silent");
}

#[test]
fn test_merge_is_idempotent() {
    let target = TempDir::new().unwrap();
    fs::write(
        target.path().join("package.json"),
        r#"{"scripts": {"yyl:d": "custom d", "yyl:0": "custom 0"}}"#,
    )
    .unwrap();

    merge_scripts(target.path(), &Reporter::new(true)).unwrap();
    let first = read_manifest(target.path());
    merge_scripts(target.path(), &Reporter::new(true)).unwrap();
    let second = read_manifest(target.path());

    assert_eq!(first, second);
    assert_eq!(first["scripts"]["yyl:d"], "custom d");
    assert_eq!(first["scripts"]["yyl:0"], "custom 0");
}

#[test]
fn test_adds_scripts_section_when_missing() {
    let target = TempDir::new().unwrap();
    fs::write(target.path().join("package.json"), r#"{"name": "demo"}"#).unwrap();

    merge_scripts(target.path(), &Reporter::new(true)).unwrap();

    let manifest = read_manifest(target.path());
    assert_eq!(manifest["scripts"]["yyl:d"], "yyl watch --silent");
}

#[test]
fn test_malformed_manifest_left_untouched() {
    let target = TempDir::new().unwrap();
    let truncated = r#"{"name": "demo", "scripts": {"#;
    fs::write(target.path().join("package.json"), truncated).unwrap();

    // Parse failure is downgraded: the call succeeds, the file is untouched.
    merge_scripts(target.path(), &Reporter::new(true)).unwrap();
    assert_eq!(
        fs::read_to_string(target.path().join("package.json")).unwrap(),
        truncated
    );
}

#[test]
fn test_written_manifest_uses_two_space_indent() {
    let target = TempDir::new().unwrap();
    merge_scripts(target.path(), &Reporter::new(true)).unwrap();

    let raw = fs::read_to_string(target.path().join("package.json")).unwrap();
    assert!(raw.contains("\n  \"scripts\""));
    assert!(raw.contains("\n    \"yyl:d\""));
    assert!(raw.ends_with('\n'));
}
