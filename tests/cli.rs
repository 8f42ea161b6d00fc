//! End-to-end runs of the wordbergler binary with answers piped on stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ANSWERS: &str = "John Doe\n\
                       Mike Doe\n\
                       \n\
                       Nike\n\
                       Breaking Bad\n\
                       \n\
                       Hiking\n\
                       0423\n\
                       123-456-7890\n\
                       1234, @!\n\
                       Secret\n\
                       1990\n\
                       \n\
                       \n";

fn run(dir: &Path, extra_args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("wordbergler")
        .unwrap()
        .arg("-q")
        .arg("-o")
        .arg(dir)
        .args(extra_args)
        .write_stdin(stdin)
        .assert()
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help_variants() {
    for flag in ["-h", "--help", "help"] {
        Command::cargo_bin("wordbergler")
            .unwrap()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("USERNAME CANDIDATES"))
            .stdout(predicate::str::contains("likely_usernames.txt"));
    }
}

#[test]
fn test_help_writes_no_files() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("wordbergler")
        .unwrap()
        .current_dir(dir.path())
        .arg("help")
        .assert()
        .success();
    assert!(!dir.path().join("custom_wordlist.txt").exists());
    assert!(!dir.path().join("likely_usernames.txt").exists());
}

#[test]
fn test_full_run_writes_both_lists() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &[], ANSWERS)
        .success()
        .stdout(predicate::str::contains("custom_wordlist.txt created."))
        .stdout(predicate::str::contains("likely_usernames.txt created."));

    let passwords = read_lines(&dir.path().join("custom_wordlist.txt"));
    assert!(!passwords.is_empty());
    assert!(passwords.iter().all(|p| (6..=16).contains(&p.chars().count())));
    assert!(passwords.contains(&"Doe1990!".to_string()));
    assert!(passwords.contains(&"Jdoe0423".to_string()));
    assert!(passwords.contains(&"Secret1234@!".to_string()));
    assert!(passwords.contains(&"JohnDoeNike".to_lowercase()));

    let usernames = read_lines(&dir.path().join("likely_usernames.txt"));
    for expected in ["johndoe", "Johndoe", "john.doe", "jdoe90", "doe90", "mdoe", "nikejohn"] {
        assert!(usernames.contains(&expected.to_string()), "Missing \"{}\"", expected);
    }

    let mut sorted = usernames.clone();
    sorted.sort();
    assert_eq!(usernames, sorted);

    let unique: HashSet<_> = usernames.iter().collect();
    assert_eq!(unique.len(), usernames.len());
}

#[test]
fn test_blank_answers_produce_empty_lists() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &[], "").success();

    assert!(read_lines(&dir.path().join("custom_wordlist.txt")).is_empty());
    assert!(read_lines(&dir.path().join("likely_usernames.txt")).is_empty());
}

#[test]
fn test_custom_window_and_file_names() {
    let dir = TempDir::new().unwrap();
    let answers = ANSWERS.replacen("1990\n\n\n", "1990\n8\n10\n", 1);
    run(
        dir.path(),
        &["--passwords-file", "pw.txt", "--usernames-file", "users.txt"],
        &answers,
    )
    .success();

    let passwords = read_lines(&dir.path().join("pw.txt"));
    assert!(!passwords.is_empty());
    assert!(passwords.iter().all(|p| (8..=10).contains(&p.chars().count())));
    assert!(dir.path().join("users.txt").exists());
}

#[test]
fn test_unparsable_numbers_fall_back() {
    let dir = TempDir::new().unwrap();
    let answers = ANSWERS.replacen("1990\n\n\n", "around 1990\nsix\nmany\n", 1);
    run(dir.path(), &[], &answers).success();

    let passwords = read_lines(&dir.path().join("custom_wordlist.txt"));
    assert!(passwords.iter().all(|p| (6..=16).contains(&p.chars().count())));

    let usernames = read_lines(&dir.path().join("likely_usernames.txt"));
    assert!(!usernames.iter().any(|u| u.contains("1990")));
}

#[test]
fn test_unique_flag_removes_repeats() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["--unique"], ANSWERS).success();

    let passwords = read_lines(&dir.path().join("custom_wordlist.txt"));
    let unique: HashSet<_> = passwords.iter().collect();
    assert_eq!(unique.len(), passwords.len());
}

#[test]
fn test_empty_file_name_fails() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["--passwords-file", ""], ANSWERS)
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("custom_wordlist.txt")).unwrap();

    run(dir.path(), &[], ANSWERS)
        .failure()
        .stderr(predicate::str::contains("Failed to create"))
        .stderr(predicate::str::contains("custom_wordlist.txt"));
}

#[test]
fn test_out_of_range_year_floor_fails() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["--year-floor=-2000000000"], ANSWERS)
        .failure()
        .stderr(predicate::str::contains("Year floor -2000000000 is outside"));
    assert!(!dir.path().join("custom_wordlist.txt").exists());
}
