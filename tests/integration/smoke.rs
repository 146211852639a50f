use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_subcomb"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("subcomb").and(predicate::str::contains("FORMATS:")));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_subcomb"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("subcomb ").and(predicate::str::contains(env!("CARGO_PKG_VERSION"))));
}

#[test]
fn rejects_unknown_format() {
    Command::new(env!("CARGO_BIN_EXE_subcomb"))
        .args(["--format", "yaml", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}
