use std::fs;

use assert_cmd::Command;

fn subcomb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_subcomb"))
}

#[test]
fn json_output_is_a_compact_array() {
    subcomb()
        .args(["-f", "json", "sub.api.example.com"])
        .assert()
        .success()
        .stdout(
            "[\"example.com\",\"sub.example.com\",\"api.example.com\",\"sub.api.example.com\",\"api.sub.example.com\"]\n",
        );
}

#[test]
fn json_output_parses() {
    let output = subcomb().args(["--format", "json", "a.b.c.example.com"]).output().unwrap();
    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(parsed.len(), 16);
    assert_eq!(parsed[0], "example.com");
}

#[test]
fn json_output_for_invalid_seed_is_empty_array() {
    subcomb().args(["-f", "json", "nope"]).assert().success().stdout("[]\n");
}

#[test]
fn csv_output_has_header() {
    subcomb()
        .args(["-f", "csv", "api.example.com"])
        .assert()
        .success()
        .stdout("subdomain\nexample.com\napi.example.com\n");
}

#[test]
fn csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.csv");
    fs::write(&input, "x.y.example.net\n").unwrap();

    subcomb()
        .args(["-f", "csv", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("subdomain"));
    assert_eq!(lines.count(), 5);
}
