use crate::EngineResult;
use crate::analysis::opportunities::score_opportunities;
use crate::analysis::policy::ANALYSIS_POLICY_VERSION;
use crate::commands::common::{apply_filter, build_filter, opportunities_section, summary_data};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::OpportunitiesData;
use crate::ingest::load_statement;

pub fn run(path: &str, from: Option<&str>, to: Option<&str>) -> EngineResult<SuccessEnvelope> {
    let filter = build_filter(from, to, "opportunities")?;
    let statement = load_statement(path)?;
    let transactions = apply_filter(statement.transactions, &filter);
    let findings = score_opportunities(&transactions);

    let data = OpportunitiesData {
        policy_version: ANALYSIS_POLICY_VERSION.to_string(),
        summary: summary_data(&statement.summary),
        opportunities: opportunities_section(&findings),
    };

    success("opportunities", data)
}
