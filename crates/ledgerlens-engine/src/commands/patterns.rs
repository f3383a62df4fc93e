use crate::EngineResult;
use crate::analysis::patterns::detect_patterns;
use crate::analysis::policy::ANALYSIS_POLICY_VERSION;
use crate::commands::common::{apply_filter, build_filter, patterns_section, summary_data};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::PatternsData;
use crate::ingest::load_statement;

pub fn run(path: &str, from: Option<&str>, to: Option<&str>) -> EngineResult<SuccessEnvelope> {
    let filter = build_filter(from, to, "patterns")?;
    let statement = load_statement(path)?;
    let transactions = apply_filter(statement.transactions, &filter);
    let findings = detect_patterns(&transactions);

    let data = PatternsData {
        policy_version: ANALYSIS_POLICY_VERSION.to_string(),
        summary: summary_data(&statement.summary),
        patterns: patterns_section(&findings),
    };

    success("patterns", data)
}
