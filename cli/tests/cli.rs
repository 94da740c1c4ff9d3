use assert_cmd::Command;
use predicates::prelude::*;

fn sample_path() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../samples/starter.txt").to_string()
}

#[test]
fn solves_the_sample_puzzle() {
    let mut cmd = Command::cargo_bin("wordseek").unwrap();
    cmd.arg(sample_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("** WORD SEARCH PUZZLE **"))
        .stdout(predicate::str::contains("** WORD SEARCH PUZZLE: ANSWERS **"))
        .stdout(predicate::str::contains("CAT E @ (1, 1)"))
        .stdout(predicate::str::contains("DOG S @ (1, 5)"))
        .stdout(predicate::str::contains("SUN SW @ (3, 4)"));
}

#[test]
fn json_output_uses_answer_key_syntax() {
    let mut cmd = Command::cargo_bin("wordseek").unwrap();
    cmd.arg("--json")
        .arg(sample_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"CAT\": \"E @ (1, 1)\""))
        .stdout(predicate::str::contains("\"SUN\": \"SW @ (3, 4)\""));
}

#[test]
fn missing_file_fails() {
    let mut cmd = Command::cargo_bin("wordseek").unwrap();
    cmd.arg("no-such-puzzle.txt").assert().failure();
}

#[test]
fn no_arguments_prints_usage() {
    let mut cmd = Command::cargo_bin("wordseek").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
