pub mod fraud;
pub mod opportunities;
pub mod patterns;
pub mod policy;
pub mod types;

use policy::{
    FRAUD_POLICY_V1, FraudPolicy, OPPORTUNITY_POLICY_V1, OpportunityPolicy, PATTERN_POLICY_V1,
    PatternPolicy,
};
use types::{OverviewStats, StatementAnalysis, Transaction};

/// Threshold bundle for one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPolicies {
    pub patterns: PatternPolicy,
    pub fraud: FraudPolicy,
    pub opportunities: OpportunityPolicy,
}

impl Default for AnalysisPolicies {
    fn default() -> Self {
        Self {
            patterns: PATTERN_POLICY_V1,
            fraud: FRAUD_POLICY_V1,
            opportunities: OPPORTUNITY_POLICY_V1,
        }
    }
}

/// Runs the three independent passes over one statement and assembles a
/// single result. Pure function: no I/O, no state across calls; the passes
/// read the same slice and never feed each other.
pub fn analyze(transactions: &[Transaction]) -> StatementAnalysis {
    analyze_with_policies(transactions, AnalysisPolicies::default())
}

pub fn analyze_with_policies(
    transactions: &[Transaction],
    policies: AnalysisPolicies,
) -> StatementAnalysis {
    StatementAnalysis {
        overview: overview(transactions),
        patterns: patterns::detect_patterns_with_policy(transactions, policies.patterns),
        fraud: fraud::screen_fraud_with_policy(transactions, policies.fraud),
        opportunities: opportunities::score_opportunities_with_policy(
            transactions,
            policies.opportunities,
        ),
    }
}

fn overview(transactions: &[Transaction]) -> OverviewStats {
    if transactions.is_empty() {
        return OverviewStats::default();
    }
    let balance_total: f64 = transactions.iter().map(|t| t.balance).sum();
    OverviewStats {
        transaction_count: transactions.len(),
        average_balance: Some(balance_total / transactions.len() as f64),
        total_volume: transactions.iter().map(|t| t.amount).sum(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::analyze;
    use super::types::{Transaction, TransactionKind};

    fn txn(posted_at: &str, amount: f64, kind: TransactionKind, balance: f64) -> Transaction {
        let parsed = NaiveDateTime::parse_from_str(posted_at, "%Y-%m-%d %H:%M:%S");
        assert!(parsed.is_ok());
        Transaction {
            posted_at: parsed.unwrap_or(NaiveDateTime::MIN),
            amount,
            kind,
            channel: "upi".to_string(),
            balance,
        }
    }

    #[test]
    fn empty_statement_produces_empty_well_formed_result() {
        let result = analyze(&[]);
        assert!(result.patterns.regular_income.is_empty());
        assert!(result.patterns.recurring_expenses.is_empty());
        assert!(result.fraud.high_velocity.is_empty());
        assert!(result.fraud.unusual_timing.is_empty());
        assert!(result.opportunities.cross_sell.is_empty());
        assert!(result.opportunities.up_sell.is_empty());
        assert_eq!(result.overview.transaction_count, 0);
        assert!(result.overview.average_balance.is_none());
    }

    #[test]
    fn passes_are_independent_over_one_input() {
        // A late-night salary series trips patterns and off-hours screening
        // without any coupling between the two findings.
        let transactions = vec![
            txn("2026-01-01 23:30:00", 50_000.0, TransactionKind::Credit, 200_000.0),
            txn("2026-02-01 23:30:00", 50_000.0, TransactionKind::Credit, 210_000.0),
            txn("2026-03-01 23:30:00", 50_000.0, TransactionKind::Credit, 220_000.0),
        ];

        let result = analyze(&transactions);
        assert_eq!(result.patterns.regular_income.len(), 1);
        assert_eq!(result.fraud.unusual_timing.len(), 3);
        assert!(result.fraud.high_velocity.is_empty());
        // 100% digital, average 210k: both cross-sell rules fire.
        assert_eq!(result.opportunities.cross_sell.len(), 2);
        assert!(result.opportunities.up_sell.is_empty());
    }

    #[test]
    fn overview_reports_count_mean_and_volume() {
        let transactions = vec![
            txn("2026-01-01 10:00:00", 1_000.0, TransactionKind::Credit, 30_000.0),
            txn("2026-01-02 10:00:00", -250.0, TransactionKind::Debit, 29_750.0),
        ];

        let result = analyze(&transactions);
        assert_eq!(result.overview.transaction_count, 2);
        assert_eq!(result.overview.average_balance, Some(29_875.0));
        assert!((result.overview.total_volume - 750.0).abs() < f64::EPSILON);
    }
}
