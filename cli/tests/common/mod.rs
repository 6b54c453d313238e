#![allow(dead_code)]
use assert_cmd::Command;
use std::path::PathBuf;

pub fn tinytina_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tinytina").unwrap();
    cmd.env_remove("TINYTINA_SCHEMA")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

pub fn fixture_schema() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tinytina-lib/tests/fixtures/schema.json")
        .display()
        .to_string()
}

/// Command with `-s <fixture>` and `-e development` already set.
pub fn with_fixture(subcommand: &str) -> Command {
    let schema = fixture_schema();
    let mut cmd = tinytina_cmd();
    cmd.args([subcommand, "-s", schema.as_str(), "-e", "development"]);
    cmd
}
