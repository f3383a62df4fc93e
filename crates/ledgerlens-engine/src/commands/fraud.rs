use crate::EngineResult;
use crate::analysis::fraud::screen_fraud;
use crate::analysis::policy::ANALYSIS_POLICY_VERSION;
use crate::commands::common::{apply_filter, build_filter, fraud_section, summary_data};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::FraudData;
use crate::ingest::load_statement;

pub fn run(path: &str, from: Option<&str>, to: Option<&str>) -> EngineResult<SuccessEnvelope> {
    let filter = build_filter(from, to, "fraud")?;
    let statement = load_statement(path)?;
    let transactions = apply_filter(statement.transactions, &filter);
    let findings = screen_fraud(&transactions);

    let data = FraudData {
        policy_version: ANALYSIS_POLICY_VERSION.to_string(),
        summary: summary_data(&statement.summary),
        fraud: fraud_section(&findings),
    };

    success("fraud", data)
}
