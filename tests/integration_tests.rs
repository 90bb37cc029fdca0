use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("three AI reply directions"))
        .stdout(predicate::str::contains("--no-preload"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatpick"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    cargo_bin_cmd!()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_cli_config_requires_value() {
    cargo_bin_cmd!().arg("--config").assert().failure();
}
