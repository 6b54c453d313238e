mod common;
use common::{fixture_schema, tinytina_cmd};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_list_text() {
    tinytina_cmd()
        .args(["list", "-s", fixture_schema().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "short-id:also-short  POST {host}/service/register  (the full name of the thing)",
        ))
        .stdout(predicate::str::contains(
            "  short-id.oh-look:download-face  GET {host}/face.png",
        ))
        .stdout(predicate::str::contains("another:delete-thing  DELETE"));
}

#[test]
fn test_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = tinytina_cmd()
        .args(["list", "-s", fixture_schema().as_str(), "--output", "json"])
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    let items = json.as_array().ok_or("expected a json array")?;
    assert_eq!(items.len(), 7);
    assert_eq!(items[0]["collection"], "short-id");
    assert_eq!(items[0]["depth"], 1);
    assert_eq!(items[2]["collection"], "short-id.oh-look");
    assert_eq!(items[2]["depth"], 2);
    Ok(())
}

#[test]
fn test_list_under_path() {
    let output = tinytina_cmd()
        .args(["list", "-s", fixture_schema().as_str(), "another"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|l| l.starts_with("another:")));
}

#[test]
fn test_list_unknown_path() {
    tinytina_cmd()
        .args(["list", "-s", fixture_schema().as_str(), "nope"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Error: could not find collection nope"));
}

#[test]
fn test_schema_from_environment() {
    tinytina_cmd()
        .env("TINYTINA_SCHEMA", fixture_schema())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("another:has-id"));
}

#[test]
fn test_missing_schema_file() {
    tinytina_cmd()
        .args(["list", "-s", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema file does not exist"));
}

#[test]
fn test_schema_without_collections() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("schema.json");
    std::fs::write(&path, r#"{ "globals": { "a": "1" } }"#)?;

    tinytina_cmd()
        .args(["list", "-s", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not find collections in schema"));
    Ok(())
}
