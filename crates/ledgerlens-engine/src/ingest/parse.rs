use std::collections::HashMap;

use serde_json::Value;

use crate::ingest::{OPTIONAL_STATEMENT_FIELDS, REQUIRED_STATEMENT_FIELDS};
use crate::{EngineError, EngineResult};

#[derive(Debug, Clone)]
pub(crate) struct ParsedRow {
    pub(crate) date: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) kind: Option<String>,
    pub(crate) channel: Option<String>,
    pub(crate) balance: Option<String>,
}

/// Sniffs the statement format (JSON array or headered CSV) and parses it
/// into raw rows. Field-level validity is the normalize step's concern.
pub(crate) fn parse_source(content: &str) -> EngineResult<Vec<ParsedRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_statement_format(
            "Statement source is empty.",
            "empty",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(EngineError::invalid_statement_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    Err(EngineError::invalid_statement_format(
        "Unsupported statement format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> EngineResult<Vec<ParsedRow>> {
    let parsed = serde_json::from_str::<Value>(content).map_err(|_| {
        EngineError::invalid_statement_format(
            "Invalid JSON input. Provide a valid JSON array.",
            "json_invalid",
        )
    })?;

    let Some(items) = parsed.as_array() else {
        return Err(EngineError::invalid_statement_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    };

    let mut rows = Vec::new();
    for item in items {
        let Some(object) = item.as_object() else {
            return Err(EngineError::invalid_statement_format(
                "JSON array entries must all be objects with transaction fields.",
                "json_non_object_entry",
            ));
        };

        rows.push(ParsedRow {
            date: read_optional_string(object.get("date")),
            amount: read_optional_string(object.get("amount")),
            kind: read_optional_string(object.get("type")),
            channel: read_optional_string(object.get("channel")),
            balance: read_optional_string(object.get("balance")),
        });
    }

    Ok(rows)
}

fn parse_csv(content: &str) -> EngineResult<Vec<ParsedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            EngineError::invalid_statement_format(
                "CSV header row is missing or unreadable.",
                "csv_headers",
            )
        })?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(EngineError::statement_schema_mismatch(
            field_names(REQUIRED_STATEMENT_FIELDS),
            field_names(OPTIONAL_STATEMENT_FIELDS),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row.map_err(|_| {
            EngineError::invalid_statement_format(
                "CSV rows are malformed or not UTF-8.",
                "csv_rows",
            )
        })?;

        rows.push(ParsedRow {
            date: value_for(&record, &index_by_name, "date"),
            amount: value_for(&record, &index_by_name, "amount"),
            kind: value_for(&record, &index_by_name, "type"),
            channel: value_for(&record, &index_by_name, "channel"),
            balance: value_for(&record, &index_by_name, "balance"),
        });
    }

    Ok(rows)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    if current.is_null() {
        return None;
    }

    if let Some(string_value) = current.as_str() {
        return Some(string_value.to_string());
    }

    if let Some(number_value) = current.as_f64() {
        return Some(number_value.to_string());
    }

    Some(current.to_string())
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    for required in REQUIRED_STATEMENT_FIELDS {
        if !actual_headers.iter().any(|value| value == required) {
            return false;
        }
    }

    for header in actual_headers {
        let allowed = REQUIRED_STATEMENT_FIELDS
            .iter()
            .chain(OPTIONAL_STATEMENT_FIELDS.iter())
            .any(|value| value == &header.as_str());
        if !allowed {
            return false;
        }
    }

    true
}

fn field_names(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|value| value.to_string()).collect()
}
