use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::{Builder, TempDir};

pub fn temp_statement_dir(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir_in("/tmp")
}

pub fn csv_row(date: &str, amount: f64, kind: &str, channel: &str, balance: f64) -> String {
    format!("{date},{amount},{kind},{channel},{balance}")
}

pub fn write_statement_csv(dir: &Path, name: &str, rows: &[String]) -> PathBuf {
    let mut body = String::from("date,amount,type,channel,balance\n");
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    write_fixture(dir, name, &body)
}

pub fn write_fixture(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let written = fs::write(&path, body);
    assert!(written.is_ok());
    path
}

pub fn patterns_payload(path: &Path) -> Value {
    envelope_to_value(ledgerlens_engine::commands::patterns::run(
        &path.display().to_string(),
        None,
        None,
    ))
}

pub fn fraud_payload(path: &Path) -> Value {
    envelope_to_value(ledgerlens_engine::commands::fraud::run(
        &path.display().to_string(),
        None,
        None,
    ))
}

pub fn opportunities_payload(path: &Path) -> Value {
    envelope_to_value(ledgerlens_engine::commands::opportunities::run(
        &path.display().to_string(),
        None,
        None,
    ))
}

pub fn analyze_payload(path: &Path, balances: Option<&Path>) -> Value {
    envelope_to_value(ledgerlens_engine::commands::analyze::run(
        &path.display().to_string(),
        balances.map(|p| p.display().to_string()).as_deref(),
    ))
}

fn envelope_to_value(
    result: ledgerlens_engine::EngineResult<ledgerlens_engine::SuccessEnvelope>,
) -> Value {
    assert!(result.is_ok(), "command failed: {result:?}");
    if let Ok(success) = result {
        let payload = serde_json::to_value(success);
        assert!(payload.is_ok());
        if let Ok(value) = payload {
            return value;
        }
    }
    Value::Null
}
