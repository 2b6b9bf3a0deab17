use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn reportcfg() -> Command {
    let mut cmd = Command::cargo_bin("reportcfg").unwrap();
    cmd.env("REPORTCFG_CONFIG", "/nonexistent/reportcfg/config.toml")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    reportcfg().arg("--help").assert().success().stdout(
        predicate::str::contains("catalog")
            .and(predicate::str::contains("options"))
            .and(predicate::str::contains("update"))
            .and(predicate::str::contains("ticks")),
    );
}

#[test]
fn test_missing_report_file() {
    reportcfg()
        .args(["check", "/nonexistent/report.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "Error: Failed to read report /nonexistent/report.json",
        ));
}

#[test]
fn test_unknown_dimension_is_a_usage_error() {
    reportcfg()
        .args(["label", "--dimension", "color", "--value", "red"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'color'"));
}

#[test]
fn test_ticks_requires_values() {
    reportcfg().arg("ticks").assert().failure();
}

#[test]
fn test_invalid_report_json_from_stdin() {
    reportcfg()
        .args(["options", "-", "--dimension", "view"])
        .write_stdin("{not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid report -"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    reportcfg()
        .args(["--log-level", "debug", "label", "--dimension", "view", "--value", "x"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("resolved config path"));
}
