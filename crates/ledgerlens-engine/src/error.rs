use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const STATEMENT_HELP_COMMAND: &str = "ledgerlens analyze --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EngineError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl EngineError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `ledgerlens {cmd} --help` for usage."),
            None => "Run `ledgerlens --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    /// The statement file could not be read at all. Kept distinct from an
    /// analysis that ran and produced zero findings.
    pub fn statement_unavailable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "statement_unavailable",
            &format!("Cannot read statement at `{location}`: {detail}"),
            vec![
                format!("Check that `{location}` exists and is readable."),
                format!("Run `{STATEMENT_HELP_COMMAND}` for the statement schema."),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn invalid_statement_format(message: &str, received_format: &str) -> Self {
        Self::new(
            "invalid_statement_format",
            message,
            vec![
                "Provide a supported statement format (JSON array or CSV with headers)."
                    .to_string(),
                format!("Run `{STATEMENT_HELP_COMMAND}` to review field requirements."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn statement_schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        let mut expected_headers = required_headers.clone();
        expected_headers.extend(optional_headers.clone());

        Self::new(
            "statement_schema_mismatch",
            "CSV headers do not satisfy the statement schema.",
            vec![
                "Include all required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
                format!("Run `{STATEMENT_HELP_COMMAND}` to review the statement schema."),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "expected_headers": expected_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn balances_unavailable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "balances_unavailable",
            &format!("Cannot read daily balances at `{location}`: {detail}"),
            vec![
                format!("Check that `{location}` exists and is readable."),
                "Provide a CSV with `day` and `balance` headers, or omit --balances."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
