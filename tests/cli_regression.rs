// Regression test: Ensure CLI errors are rendered with miette diagnostics
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_check_accepts_a_valid_fixture() {
    let mut cmd = Command::cargo_bin("mergespec").unwrap();
    cmd.arg("check").arg("fixtures/merge.txt");
    cmd.assert()
        .success()
        .stdout(contains("5 cases in 3 sections"));
}

#[test]
fn cli_check_walks_a_fixture_directory() {
    let mut cmd = Command::cargo_bin("mergespec").unwrap();
    cmd.arg("check").arg("fixtures");
    cmd.assert()
        .success()
        .stdout(contains("merge.txt").and(contains("chains.txt")));
}

#[test]
fn cli_reports_miette_diagnostics_on_structural_errors() {
    // Create a temporary malformed fixture
    let bad_file = "tests/bad_fixture.txt";
    fs::write(bad_file, "a\nb\n=> c\n" /* input at line 1 never answered */).unwrap();

    let mut cmd = Command::cargo_bin("mergespec").unwrap();
    cmd.arg("check").arg(bad_file);
    cmd.assert()
        .failure()
        .stderr(contains("mergespec::parse::unmatched_input"));

    // Clean up
    let _ = fs::remove_file(bad_file);
}

#[test]
fn cli_sections_lists_names_in_first_seen_order() {
    let mut cmd = Command::cargo_bin("mergespec").unwrap();
    cmd.arg("sections").arg("fixtures/merge.txt");
    cmd.assert()
        .success()
        .stdout(contains("Single values (2 cases)").and(contains("Whitespace handling (1 cases)")));
}

#[test]
fn cli_sections_emits_json_when_asked() {
    let mut cmd = Command::cargo_bin("mergespec").unwrap();
    cmd.arg("sections").arg("fixtures/merge.txt").arg("--json");
    cmd.assert()
        .success()
        .stdout(contains("\"section\": \"Pair merging\"").and(contains("\"expected\": \"foo bar baz\"")));
}

#[test]
fn cli_check_fails_on_a_missing_file() {
    let mut cmd = Command::cargo_bin("mergespec").unwrap();
    cmd.arg("check").arg("tests/no_such_fixture.txt");
    cmd.assert().failure().stderr(contains("mergespec::io::read"));
}
