use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn compute_rouge() -> Command {
    Command::cargo_bin("compute_rouge").expect("binary")
}

#[test]
fn missing_rouge_script_fails() {
    let temp = tempdir().unwrap();
    let system = temp.path().join("system");
    let references = temp.path().join("references");
    fs::create_dir_all(&system).unwrap();
    fs::create_dir_all(&references).unwrap();
    fs::write(system.join("1.1.txt"), "cat sat").unwrap();
    fs::write(references.join("A.1.1.txt"), "cat sat").unwrap();

    compute_rouge()
        .arg(&system)
        .arg(&references)
        .arg(temp.path().join("no-rouge-here"))
        .arg("--json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ROUGE-1.5.5.pl"));
}

#[test]
fn requires_three_directories() {
    compute_rouge()
        .arg("system")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
