pub(crate) mod balances;
pub(crate) mod normalize;
pub(crate) mod parse;

use std::path::Path;

use crate::analysis::types::{DailyBalance, Transaction};
use crate::{EngineError, EngineResult};

pub(crate) const REQUIRED_STATEMENT_FIELDS: &[&str] = &["date", "amount", "type"];
pub(crate) const OPTIONAL_STATEMENT_FIELDS: &[&str] = &["channel", "balance"];

/// Row accounting for one loaded statement. Rows failing the upstream
/// contract (valid date, defined amount, known type) are dropped and
/// counted, never analyzed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StatementSummary {
    pub rows_read: i64,
    pub rows_analyzed: i64,
    pub rows_dropped: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedStatement {
    pub transactions: Vec<Transaction>,
    pub summary: StatementSummary,
}

pub(crate) fn load_statement(path: &str) -> EngineResult<LoadedStatement> {
    let source_path = Path::new(path);
    let content = std::fs::read_to_string(source_path)
        .map_err(|error| EngineError::statement_unavailable(source_path, &error.to_string()))?;
    let parsed_rows = parse::parse_source(&content)?;
    Ok(normalize::normalize_rows(parsed_rows))
}

pub(crate) fn load_daily_balances(path: &str) -> EngineResult<Vec<DailyBalance>> {
    let source_path = Path::new(path);
    let content = std::fs::read_to_string(source_path)
        .map_err(|error| EngineError::balances_unavailable(source_path, &error.to_string()))?;
    balances::parse_daily_balances(source_path, &content)
}
