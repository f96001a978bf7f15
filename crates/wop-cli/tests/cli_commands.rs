//! Integration tests for the `wop` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wop() -> Command {
    Command::cargo_bin("wop").unwrap()
}

fn store_arg(dir: &TempDir) -> String {
    dir.path().join("prompts.json").display().to_string()
}

// ---------------------------------------------------------------------------
// list / first-run seeding
// ---------------------------------------------------------------------------

#[test]
fn list_seeds_store_on_first_run() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["list", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("truths").and(predicate::str::contains("dares")))
        .stderr(predicate::str::contains("new store seeded"));

    assert!(dir.path().join("prompts.json").exists());
}

#[test]
fn list_filters_by_difficulty() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["add", "truths", "Only at six", "-d", "6", "-f", &store])
        .assert()
        .success();

    wop()
        .args(["list", "truths", "-d", "6", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Only"));
}

#[test]
fn corrupt_store_recovers_to_seed() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    fs::write(dir.path().join("prompts.json"), "{ not json").unwrap();

    wop()
        .args(["list", "-f", &store])
        .assert()
        .success()
        .stderr(predicate::str::contains("unreadable store replaced"));
}

// ---------------------------------------------------------------------------
// add / edit / remove
// ---------------------------------------------------------------------------

#[test]
fn add_then_list_shows_prompt() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["add", "truths", "Custom question?", "-d", "3", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to truths"));

    wop()
        .args(["list", "truths", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom"));
}

#[test]
fn add_rejects_out_of_range_difficulty() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["add", "dares", "fine text", "-d", "9", "-f", &store])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn add_rejects_empty_text() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["add", "dares", "   ", "-d", "2", "-f", &store])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["add", "banana", "text", "-d", "2", "-f", &store])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn edit_updates_prompt_in_place() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    // Seed the store; seed ids start at 1 per category.
    wop().args(["list", "-f", &store]).assert().success();

    wop()
        .args(["edit", "truths", "1", "Edited text", "-d", "2", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 in truths"));

    wop()
        .args(["list", "truths", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited"));
}

#[test]
fn edit_missing_id_fails() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["edit", "truths", "999", "text", "-d", "2", "-f", &store])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no prompt with id 999"));
}

#[test]
fn remove_existing_prompt() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop().args(["list", "-f", &store]).assert().success();

    wop()
        .args(["remove", "truths", "1", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 from truths"));
}

#[test]
fn remove_missing_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["remove", "truths", "999", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));
}

// ---------------------------------------------------------------------------
// replace (strict) / import (lenient) / export
// ---------------------------------------------------------------------------

#[test]
fn replace_swaps_the_whole_pool() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    let bulk = dir.path().join("bulk.txt");
    fs::write(&bulk, "First,1\nSecond,2\n").unwrap();

    wop()
        .args(["replace", "truths", bulk.to_str().unwrap(), "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("with 2"));

    wop()
        .args(["list", "truths", "-f", &store])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("First")
                .and(predicate::str::contains("Second"))
                .and(predicate::str::contains("2 prompts")),
        );
}

#[test]
fn replace_with_bad_line_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop().args(["list", "-f", &store]).assert().success();

    let bulk = dir.path().join("bulk.txt");
    fs::write(&bulk, "ok,2\nbroken line\n").unwrap();

    wop()
        .args(["replace", "truths", bulk.to_str().unwrap(), "-f", &store])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("bulk replace rejected")
                .and(predicate::str::contains("line 2")),
        );

    // The seeded pool is still intact.
    wop()
        .args(["list", "truths", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("impression"));
}

#[test]
fn import_skips_bad_lines_and_reports_counts() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    let bulk = dir.path().join("bulk.txt");
    fs::write(&bulk, "Good one,2\nbad line\nAnother,5\n").unwrap();

    wop()
        .args(["import", "dares", bulk.to_str().unwrap(), "-f", &store])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Imported 2").and(predicate::str::contains("1 skipped")),
        );

    wop()
        .args(["list", "dares", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good"));
}

#[test]
fn import_with_nothing_valid_imports_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    let bulk = dir.path().join("bulk.txt");
    fs::write(&bulk, "no comma here\n").unwrap();

    wop()
        .args(["import", "dares", bulk.to_str().unwrap(), "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing imported"));
}

#[test]
fn export_round_trips_the_bulk_format() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    let bulk = dir.path().join("bulk.txt");
    fs::write(&bulk, "First,1\nSecond,2\n").unwrap();

    wop()
        .args(["replace", "truths", bulk.to_str().unwrap(), "-f", &store])
        .assert()
        .success();

    let out = dir.path().join("out.txt");
    wop()
        .args([
            "export",
            "truths",
            "-o",
            out.to_str().unwrap(),
            "-f",
            &store,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported truths"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "First,1\nSecond,2");
}

#[test]
fn export_prints_to_stdout_by_default() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    let bulk = dir.path().join("bulk.txt");
    fs::write(&bulk, "Only line,4\n").unwrap();

    wop()
        .args(["replace", "dares", bulk.to_str().unwrap(), "-f", &store])
        .assert()
        .success();

    wop()
        .args(["export", "dares", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Only line,4"));
}

// ---------------------------------------------------------------------------
// roll / simulate / play
// ---------------------------------------------------------------------------

#[test]
fn roll_draws_a_prompt_from_the_seeded_store() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    // The seed pools cover every difficulty, so a roll always draws.
    wop()
        .args(["roll", "truths", "--seed", "1", "-f", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Truth"));
}

#[test]
fn simulate_prints_a_trace() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args([
            "simulate", "truths", "--rounds", "5", "--seed", "42", "-f", &store,
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5 rounds, seed=42")
                .and(predicate::str::contains("rounds drew a prompt")),
        );
}

#[test]
fn simulate_is_deterministic_for_a_seed() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    wop().args(["list", "-f", &store]).assert().success();

    let run = |store: &str| {
        let out = wop()
            .args(["simulate", "truths", "--seed", "7", "-f", store])
            .output()
            .unwrap();
        String::from_utf8(out.stdout).unwrap()
    };
    assert_eq!(run(&store), run(&store));
}

#[test]
fn play_rolls_and_reveals() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["play", "truths", "--fast", "--seed", "7", "-f", &store])
        .write_stdin("roll\nshow\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The die is cast")
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_show_before_roll_reports_no_pending() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    wop()
        .args(["play", "truths", "--fast", "-f", &store])
        .write_stdin("show\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no roll pending"));
}
