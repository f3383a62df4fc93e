use std::fs;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

const EXPECTED_ROOT_HELP: &str = "Ledgerlens - bank statement intelligence layer

Usage:
  ledgerlens <command>

Start here:
  ledgerlens analyze --help
  ledgerlens analyze <path>
  ledgerlens patterns <path>
";

static TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

fn unique_test_dir() -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(value) => value.as_nanos(),
        Err(_) => 0,
    };
    let sequence = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "ledgerlens-cli-test-{}-{stamp}-{sequence}",
        std::process::id()
    ));
    path
}

fn run_cli(args: &[&str]) -> (bool, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ledgerlens"));
    for arg in args {
        command.arg(arg);
    }
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let output = command.output();
    assert!(output.is_ok());
    if let Ok(result) = output {
        let stdout = String::from_utf8(result.stdout);
        assert!(stdout.is_ok());
        if let Ok(stdout_text) = stdout {
            return (result.status.success(), stdout_text);
        }
    }

    (false, String::new())
}

fn write_fixture(dir: &std::path::Path, name: &str, body: &str) -> String {
    let created = fs::create_dir_all(dir);
    assert!(created.is_ok());

    let path = dir.join(name);
    let written = fs::write(&path, body);
    assert!(written.is_ok());
    path.display().to_string()
}

fn parse_json(body: &str) -> Value {
    let parsed = serde_json::from_str::<Value>(body);
    assert!(parsed.is_ok(), "expected JSON output, got: {body}");
    if let Ok(value) = parsed {
        return value;
    }
    Value::Null
}

const SALARY_STATEMENT: &str = "\
date,amount,type,channel,balance
2026-01-01 09:00:00,50000,Credit,Net Banking Transfer,80000
2026-02-01 09:00:00,50000,Credit,Net Banking Transfer,95000
2026-03-01 09:00:00,50000,Credit,Net Banking Transfer,110000
2026-01-05 20:00:00,1200,Debit,UPI,78800
2026-02-05 20:00:00,1200,Debit,UPI,93800
";

#[test]
fn no_args_prints_root_help_and_succeeds() {
    let (ok, body) = run_cli(&[]);
    assert!(ok);
    assert_eq!(body, EXPECTED_ROOT_HELP);
}

#[test]
fn bare_help_prints_top_level_help() {
    let (ok, body) = run_cli(&["--help"]);
    assert!(ok);
    assert!(body.starts_with("Ledgerlens — bank statement intelligence layer"));
    assert!(body.contains("ledgerlens analyze <path>"));
    assert!(body.contains("--json"));
}

#[test]
fn patterns_json_contract_holds_for_a_salary_statement() {
    let dir = unique_test_dir();
    let path = write_fixture(&dir, "statement.csv", SALARY_STATEMENT);

    let (ok, body) = run_cli(&["patterns", &path, "--json"]);
    assert!(ok);

    let payload = parse_json(&body);
    assert_eq!(payload["ok"], Value::Bool(true));
    assert_eq!(payload["version"], Value::String("v1".to_string()));
    assert_eq!(payload["command"], Value::String("patterns".to_string()));

    let income = payload["data"]["patterns"]["regular_income"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert_eq!(income.len(), 1);
    assert_eq!(income[0]["occurrences"], Value::from(3));
}

#[test]
fn analyze_text_report_names_every_section() {
    let dir = unique_test_dir();
    let path = write_fixture(&dir, "statement.csv", SALARY_STATEMENT);
    let balances = write_fixture(
        &dir,
        "balances.csv",
        "day,balance\n2026-03-01,110000\n",
    );

    let (ok, body) = run_cli(&["analyze", &path, "--balances", &balances]);
    assert!(ok);
    assert!(body.starts_with("Statement report"));
    assert!(body.contains("Overview:"));
    assert!(body.contains("Regular income:"));
    assert!(body.contains("No fraud indicators found."));
    assert!(body.contains("Daily balances:"));
}

#[test]
fn empty_statement_text_output_is_friendly() {
    let dir = unique_test_dir();
    let path = write_fixture(&dir, "statement.csv", "date,amount,type,channel,balance\n");

    let (ok, body) = run_cli(&["patterns", &path]);
    assert!(ok);
    assert!(body.starts_with("No transaction patterns found."));
}

#[test]
fn missing_statement_fails_with_json_error_contract() {
    let dir = unique_test_dir();
    let path = dir.join("missing.csv").display().to_string();

    let (ok, body) = run_cli(&["fraud", &path, "--json"]);
    assert!(!ok);

    let payload = parse_json(&body);
    assert_eq!(
        payload["error"]["code"],
        Value::String("statement_unavailable".to_string())
    );
    assert!(payload.get("ok").is_none());
    let steps = payload["error"]["recovery_steps"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert!(!steps.is_empty());
}

#[test]
fn missing_statement_text_error_uses_recovery_layout() {
    let dir = unique_test_dir();
    let path = dir.join("missing.csv").display().to_string();

    let (ok, body) = run_cli(&["opportunities", &path]);
    assert!(!ok);
    assert!(body.starts_with("Something went wrong, but it's easy to fix."));
    assert!(body.contains("Error:    statement_unavailable"));
    assert!(body.contains("What to do next:"));
}

#[test]
fn invalid_date_argument_fails_with_command_hint() {
    let (ok, body) = run_cli(&["patterns", "statement.csv", "--from", "not-a-date"]);
    assert!(!ok);
    assert!(body.contains("invalid_argument"));
    assert!(body.contains("ledgerlens patterns --help"));
}

#[test]
fn unknown_command_fails_cleanly() {
    let (ok, body) = run_cli(&["recommendations"]);
    assert!(!ok);
    assert!(body.contains("invalid_argument"));
}
