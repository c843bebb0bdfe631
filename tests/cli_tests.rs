use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn stanza() -> Command {
    Command::cargo_bin("stanza").unwrap()
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/projects")
        .join(name)
}

#[test]
fn check_accepts_a_well_formed_file() {
    stanza()
        .arg("check")
        .arg(fixture("basic/tests/client_balances.stt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
}

#[test]
fn check_walks_a_directory_and_reports_every_broken_file() {
    stanza()
        .arg("check")
        .arg(fixture("broken_case"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.stt"))
        .stderr(predicate::str::contains("malformed.stt"))
        .stderr(predicate::str::contains("stanza::parse"));
}

#[test]
fn check_rejects_a_non_stt_path() {
    stanza()
        .arg("check")
        .arg(fixture("basic/src/seed_data.sql"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("seed_data.sql"));
}

#[test]
fn run_prints_the_summary_for_a_clean_project() {
    stanza()
        .arg("run")
        .arg(fixture("basic"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Run summary: total 4,"));
}

#[test]
fn run_emits_json_when_asked() {
    stanza()
        .arg("run")
        .arg(fixture("basic"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": 4"))
        .stdout(predicate::str::contains("\"errored\": 0"));
}

#[test]
fn run_fails_when_a_file_does_not_parse() {
    stanza()
        .arg("run")
        .arg(fixture("broken_case"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed.stt"));
}

#[test]
fn a_missing_subcommand_is_a_usage_error() {
    stanza()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
