use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn subcomb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_subcomb"))
}

#[test]
fn single_seed_from_argument() {
    subcomb()
        .arg("sub.api.example.com")
        .assert()
        .success()
        .stdout("example.com\nsub.example.com\napi.example.com\nsub.api.example.com\napi.sub.example.com\n")
        .stderr("");
}

#[test]
fn mixed_case_and_trailing_dot_match_lowercase() {
    let lower = subcomb().arg("sub.api.example.com").output().unwrap();
    let mixed = subcomb().arg("Sub.API.Example.COM.").output().unwrap();
    assert!(mixed.status.success());
    assert_eq!(lower.stdout, mixed.stdout);
}

#[test]
fn base_domain_alone() {
    subcomb().arg("example.com").assert().success().stdout("example.com\n");
}

#[test]
fn invalid_seed_produces_no_output() {
    subcomb().arg("not a domain").assert().success().stdout("").stderr("");
}

#[test]
fn invalid_seed_is_reported_when_verbose() {
    subcomb()
        .args(["-v", "not a domain"])
        .assert()
        .success()
        .stdout("")
        .stderr(
            predicate::str::contains("Processing: not a domain")
                .and(predicate::str::contains("Warning: 'not a domain' doesn't appear to be a valid subdomain"))
                .and(predicate::str::contains("Generated 0 results")),
        );
}

#[test]
fn reads_piped_stdin() {
    subcomb()
        .write_stdin("a.example.com\n# skip me\n\nb.example.com\n")
        .assert()
        .success()
        .stdout("example.com\na.example.com\nb.example.com\n");
}

#[test]
fn non_utf8_line_is_skipped_not_fatal() {
    subcomb()
        .write_stdin(&b"a.example.com\ncaf\xe9.example.com\nb.example.com\n"[..])
        .assert()
        .success()
        .stdout("example.com\na.example.com\nb.example.com\n");
}

#[test]
fn empty_stdin_produces_nothing() {
    subcomb().write_stdin("").assert().success().stdout("");
}

#[test]
fn file_input_skips_blank_lines_and_comments() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("seeds.txt");
    fs::write(&input, "a.b.example.com\n\n# comment\nc.example.com\n").unwrap();

    subcomb()
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("example.com\na.example.com\nb.example.com\na.b.example.com\nb.a.example.com\nc.example.com\n");
}

#[test]
fn input_file_wins_over_argument() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("seeds.txt");
    fs::write(&input, "x.example.org\n").unwrap();

    subcomb()
        .arg("--input")
        .arg(&input)
        .arg("sub.api.example.com")
        .assert()
        .success()
        .stdout("example.org\nx.example.org\n");
}

#[test]
fn duplicates_kept_when_unique_disabled() {
    subcomb()
        .args(["--unique=false", "a.a.example.com"])
        .assert()
        .success()
        .stdout("example.com\na.example.com\na.example.com\na.a.example.com\na.a.example.com\n");

    subcomb()
        .arg("a.a.example.com")
        .assert()
        .success()
        .stdout("example.com\na.example.com\na.a.example.com\n");
}

#[test]
fn dedup_spans_all_input_lines() {
    subcomb()
        .write_stdin("a.example.com\nb.example.com\na.example.com\n")
        .assert()
        .success()
        .stdout("example.com\na.example.com\nb.example.com\n");
}

#[test]
fn writes_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("results.txt");

    subcomb()
        .arg("-o")
        .arg(&output)
        .arg("api.example.com")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "example.com\napi.example.com\n");
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    subcomb()
        .arg("-i")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with("Error: ").and(predicate::str::contains("error opening input file")));
}

#[test]
fn uncreatable_output_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    subcomb()
        .arg("-o")
        .arg(dir.path().join("missing-dir").join("out.txt"))
        .arg("example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error creating output file"));
}
