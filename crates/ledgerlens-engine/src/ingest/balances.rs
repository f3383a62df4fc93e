use std::path::Path;

use crate::analysis::types::DailyBalance;
use crate::{EngineError, EngineResult};

/// Parses the optional end-of-day balance series: a CSV with `day` and
/// `balance` headers. The series is reported back as-is; it never feeds the
/// analysis passes. Rows with an unparseable balance are dropped, matching
/// the statement side's drop semantics.
pub(crate) fn parse_daily_balances(
    source_path: &Path,
    content: &str,
) -> EngineResult<Vec<DailyBalance>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(EngineError::balances_unavailable(
            source_path,
            "file is empty",
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(trimmed.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| EngineError::balances_unavailable(source_path, "header row is unreadable"))?
        .iter()
        .map(|value| value.trim().to_ascii_lowercase())
        .collect::<Vec<String>>();

    let day_index = headers.iter().position(|name| name == "day");
    let balance_index = headers.iter().position(|name| name == "balance");
    let (Some(day_index), Some(balance_index)) = (day_index, balance_index) else {
        return Err(EngineError::balances_unavailable(
            source_path,
            "expected `day` and `balance` headers",
        ));
    };

    let mut points = Vec::new();
    for result_row in reader.records() {
        let record = result_row
            .map_err(|_| EngineError::balances_unavailable(source_path, "rows are malformed"))?;
        let day = record.get(day_index).unwrap_or("").trim().to_string();
        let balance = record
            .get(balance_index)
            .and_then(|value| value.trim().replace(',', "").parse::<f64>().ok());
        let Some(balance) = balance else {
            continue;
        };
        if day.is_empty() {
            continue;
        }
        points.push(DailyBalance { day, balance });
    }

    Ok(points)
}
