//! End-to-end tests for the imagegate binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"
images:
  - id: ami-abc123
    name: my-image-v3
    owner: "111"
  - id: ami-def456
    name: shared-base
    owner: "222"
"#;

fn project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("imagegate.yml"), config).unwrap();
    fs::write(temp.path().join("catalog.yml"), CATALOG).unwrap();
    temp
}

fn imagegate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("imagegate").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("IMAGEGATE_NAME")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    imagegate(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    imagegate(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn taken_name_exits_1_with_image_id() {
    let temp = project("destination_name: my-image-v3\ncatalog:\n  file: catalog.yml\n");
    imagegate(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ami-abc123"));
}

#[test]
fn free_name_exits_0() {
    let temp = project("destination_name: my-image-v4\ncatalog:\n  file: catalog.yml\n");
    imagegate(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("my-image-v4"));
}

#[test]
fn name_flag_overrides_config() {
    let temp = project("destination_name: my-image-v4\ncatalog:\n  file: catalog.yml\n");
    imagegate(&temp)
        .args(["check", "--name", "my-image-v3"])
        .assert()
        .code(1);
}

#[test]
fn owner_flag_filters_lookup() {
    let temp = project("destination_name: shared-base\ncatalog:\n  file: catalog.yml\n");
    imagegate(&temp)
        .args(["check", "--owner", "111"])
        .assert()
        .success();
}

#[test]
fn force_skips_lookup() {
    let temp = project("destination_name: my-image-v3\ncatalog:\n  file: catalog.yml\n");
    imagegate(&temp)
        .args(["check", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping prevalidation"));
}

#[test]
fn force_succeeds_with_missing_catalog_file() {
    let temp = project("destination_name: my-image-v3\ncatalog:\n  file: gone.yml\n");
    imagegate(&temp)
        .args(["check", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping prevalidation"));
}

#[test]
fn missing_catalog_file_exits_2() {
    let temp = project("destination_name: my-image-v3\ncatalog:\n  file: gone.yml\n");
    imagegate(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gone.yml"));
}

#[test]
fn missing_name_exits_2() {
    let temp = project("catalog:\n  file: catalog.yml\n");
    imagegate(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("destination_name"));
}

#[test]
fn missing_config_override_exits_2() {
    let temp = TempDir::new().unwrap();
    imagegate(&temp)
        .args(["--config", "nope.yml", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope.yml"));
}

#[test]
fn config_json_output() {
    let temp = project("destination_name: web\nowners: ['111']\n");
    imagegate(&temp)
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"destination_name\": \"web\""));
}
