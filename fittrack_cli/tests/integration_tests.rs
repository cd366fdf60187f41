//! Integration tests for the fittrack binary.
//!
//! These tests verify end-to-end behavior: the fixed demo readings are
//! dispatched, computed and printed as one summary line each, in order.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fittrack"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fitness metrics from raw sensor readings",
        ));
}

#[test]
fn test_prints_one_summary_line_per_reading() {
    let output = cli().assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).expect("stdout is valid UTF-8");

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);

    // Wire order: swimming, running, walking
    assert_eq!(
        lines[0],
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
         Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
         Потрачено ккал: 336.000."
    );
    assert_eq!(
        lines[1],
        "Тип тренировки: Running; Длительность: 1.000 ч.; \
         Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
         Потрачено ккал: 797.805."
    );
    assert_eq!(
        lines[2],
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
         Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; \
         Потрачено ккал: 349.252."
    );
}

#[test]
fn test_rejects_unexpected_arguments() {
    cli().arg("--bogus-flag").assert().failure();
}
