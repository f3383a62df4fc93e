use crate::EngineResult;
use crate::analysis::analyze;
use crate::analysis::policy::ANALYSIS_POLICY_VERSION;
use crate::commands::common::{
    apply_filter, build_filter, fraud_section, opportunities_section, overview_data,
    patterns_section, summary_data,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{AnalyzeData, BalancePointRow};
use crate::ingest::{load_daily_balances, load_statement};

#[derive(Debug, Default)]
pub struct AnalyzeRunOptions {
    pub path: String,
    pub balances_path: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn run(path: &str, balances_path: Option<&str>) -> EngineResult<SuccessEnvelope> {
    run_with_options(AnalyzeRunOptions {
        path: path.to_string(),
        balances_path: balances_path.map(std::string::ToString::to_string),
        from: None,
        to: None,
    })
}

pub fn run_with_options(options: AnalyzeRunOptions) -> EngineResult<SuccessEnvelope> {
    let filter = build_filter(options.from.as_deref(), options.to.as_deref(), "analyze")?;
    let statement = load_statement(&options.path)?;
    let transactions = apply_filter(statement.transactions, &filter);
    let result = analyze(&transactions);

    // The balance series rides along untouched; none of the passes read it.
    let balance_trend = match options.balances_path.as_deref() {
        Some(balances_path) => load_daily_balances(balances_path)?
            .into_iter()
            .map(|point| BalancePointRow {
                day: point.day,
                balance: point.balance,
            })
            .collect(),
        None => Vec::new(),
    };

    let data = AnalyzeData {
        policy_version: ANALYSIS_POLICY_VERSION.to_string(),
        summary: summary_data(&statement.summary),
        overview: overview_data(&result.overview),
        patterns: patterns_section(&result.patterns),
        fraud: fraud_section(&result.fraud),
        opportunities: opportunities_section(&result.opportunities),
        balance_trend,
    };

    success("analyze", data)
}
