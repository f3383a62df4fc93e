//! Serializable payload shapes for command output. Internal analysis types
//! stay plain; these rows carry formatted dates and decimal amounts.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatementSummaryData {
    pub rows_read: i64,
    pub rows_analyzed: i64,
    pub rows_dropped: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub posted_at: String,
    pub amount: f64,
    pub kind: String,
    pub channel: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternGroupRow {
    pub amount: f64,
    pub occurrences: i64,
    pub transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternsSection {
    pub regular_income: Vec<PatternGroupRow>,
    pub recurring_expenses: Vec<PatternGroupRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VelocityBucketRow {
    pub hour_bucket: String,
    pub occurrences: i64,
    pub transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FraudSection {
    pub high_velocity: Vec<VelocityBucketRow>,
    pub unusual_timing: Vec<TransactionRow>,
    pub alert_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRow {
    pub product: String,
    pub score: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpportunitiesSection {
    pub cross_sell: Vec<RecommendationRow>,
    pub up_sell: Vec<RecommendationRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewData {
    pub transaction_count: i64,
    pub average_balance: Option<f64>,
    pub total_volume: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalancePointRow {
    pub day: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternsData {
    pub policy_version: String,
    pub summary: StatementSummaryData,
    pub patterns: PatternsSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct FraudData {
    pub policy_version: String,
    pub summary: StatementSummaryData,
    pub fraud: FraudSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpportunitiesData {
    pub policy_version: String,
    pub summary: StatementSummaryData,
    pub opportunities: OpportunitiesSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeData {
    pub policy_version: String,
    pub summary: StatementSummaryData,
    pub overview: OverviewData,
    pub patterns: PatternsSection,
    pub fraud: FraudSection,
    pub opportunities: OpportunitiesSection,
    pub balance_trend: Vec<BalancePointRow>,
}
