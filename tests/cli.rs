use assert_cmd::prelude::*;
use predicates::str::contains;
use std::collections::HashSet;
use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn output_path(name: &str) -> PathBuf {
    let path = temp_dir().join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn passforge_cli_help() {
    Command::cargo_bin("passforge")
        .unwrap()
        .arg("--help")
        .stdout(Stdio::piped())
        .assert()
        .success()
        .stdout(contains("passforge - Targeted password-candidate list generation"))
        .stdout(contains("-b, --base <BASE>"))
        .stdout(contains("-p, --phone <PHONE>"))
        .stdout(contains("-o, --out <OUT>"))
        .stdout(contains("-s, --symbols <SYMBOLS>"))
        .stdout(contains("--include-prefixes"))
        .stdout(contains("--min-length <MIN_LENGTH>"))
        .stdout(contains("--max-length <MAX_LENGTH>"))
        .stdout(contains("--unsorted"))
        .stdout(contains("-c, --config <CONFIG>"))
        .stdout(contains("-h, --help"))
        .stdout(contains("Print help"))
        .stdout(contains("-V, --version"))
        .stdout(contains("Print version"));
}

#[test]
fn passforge_cli_end_to_end() {
    let out = output_path("passforge_cli_end_to_end.txt");

    Command::cargo_bin("passforge")
        .unwrap()
        .args(["--base", "sourav", "--phone", "9876543210"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("candidates to"))
        .stdout(contains("Sample:"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert!(lines.contains(&"Sourav9876"));
    // the raw phone is 10 chars, inside the default [8, 16] window
    assert!(lines.contains(&"9876543210"));
    // the bare base is 6 chars, below the floor
    assert!(!lines.contains(&"sourav"));

    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), lines.len(), "duplicate lines in output");
    for line in &lines {
        let len = line.chars().count();
        assert!((8..=16).contains(&len), "out-of-window line: {line}");
    }

    let _ = fs::remove_file(&out);
}

#[test]
fn passforge_cli_sorted_output_is_deterministic() {
    let first = output_path("passforge_cli_deterministic_1.txt");
    let second = output_path("passforge_cli_deterministic_2.txt");

    for out in [&first, &second] {
        Command::cargo_bin("passforge")
            .unwrap()
            .args(["--base", "sourav", "--phone", "9876543210"])
            .args(["--out", out.to_str().unwrap()])
            .assert()
            .success();
    }

    let content = fs::read_to_string(&first).unwrap();
    assert_eq!(content, fs::read_to_string(&second).unwrap());

    // default presentation order is (length, lexical)
    let lengths: Vec<usize> = content.lines().map(|l| l.chars().count()).collect();
    let mut sorted = lengths.clone();
    sorted.sort();
    assert_eq!(lengths, sorted);

    let _ = fs::remove_file(&first);
    let _ = fs::remove_file(&second);
}

#[test]
fn passforge_cli_symbol_override() {
    let out = output_path("passforge_cli_symbol_override.txt");

    Command::cargo_bin("passforge")
        .unwrap()
        .args(["--base", "sourav", "--phone", "", "--symbols", "@"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.lines().any(|l| l == "sourav@2023"));
    // default separators other than '@' are gone
    assert!(!content.contains("sourav_"));
    assert!(!content.contains("sourav-"));

    let _ = fs::remove_file(&out);
}

#[test]
fn passforge_cli_inverted_window_fails_without_output() {
    let out = output_path("passforge_cli_inverted_window.txt");

    Command::cargo_bin("passforge")
        .unwrap()
        .args(["--base", "sourav", "--phone", ""])
        .args(["--min-length", "8", "--max-length", "7"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("min_length (8) exceeds max_length (7)"));

    assert!(!out.exists(), "output file written despite config error");
}

#[test]
fn passforge_cli_empty_base_reports_no_candidates() {
    let out = output_path("passforge_cli_empty_base.txt");

    Command::cargo_bin("passforge")
        .unwrap()
        .args(["--base", "", "--phone", ""])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("No candidates generated"));

    assert!(!out.exists(), "output file written for empty base");
}

#[test]
fn passforge_cli_unknown_config_file_fails() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["--base", "sourav", "--phone", ""])
        .args(["--config", "tests/resources/config/non_existing.yml"])
        .assert()
        .failure()
        .stderr(contains("Failed to read configuration file"));
}
