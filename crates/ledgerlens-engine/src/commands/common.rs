use chrono::{NaiveDate, NaiveDateTime};

use crate::analysis::types::{
    FraudFindings, OpportunityFindings, OverviewStats, PatternFindings, Transaction,
};
use crate::contracts::types::{
    FraudSection, OpportunitiesSection, OverviewData, PatternGroupRow, PatternsSection,
    RecommendationRow, StatementSummaryData, TransactionRow, VelocityBucketRow,
};
use crate::ingest::StatementSummary;
use crate::{EngineError, EngineResult};

/// Optional posted-at date window applied after ingest, before analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub(crate) fn build_filter(
    from: Option<&str>,
    to: Option<&str>,
    command: &str,
) -> EngineResult<StatementFilter> {
    let parsed_from = match from {
        Some(value) => Some(parse_iso_date_strict(value, "from", command)?),
        None => None,
    };
    let parsed_to = match to {
        Some(value) => Some(parse_iso_date_strict(value, "to", command)?),
        None => None,
    };

    if let (Some(start), Some(end)) = (parsed_from, parsed_to)
        && start > end
    {
        return Err(EngineError::invalid_argument_for_command(
            "Invalid date range: `from` must be on or before `to`.",
            Some(command),
        ));
    }

    Ok(StatementFilter {
        from: parsed_from,
        to: parsed_to,
    })
}

pub(crate) fn apply_filter(
    transactions: Vec<Transaction>,
    filter: &StatementFilter,
) -> Vec<Transaction> {
    if filter.from.is_none() && filter.to.is_none() {
        return transactions;
    }
    transactions
        .into_iter()
        .filter(|transaction| {
            let day = transaction.posted_at.date();
            if let Some(from) = filter.from
                && day < from
            {
                return false;
            }
            if let Some(to) = filter.to
                && day > to
            {
                return false;
            }
            true
        })
        .collect()
}

fn parse_iso_date_strict(value: &str, field_name: &str, command: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        EngineError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        )
    })
}

pub(crate) fn summary_data(summary: &StatementSummary) -> StatementSummaryData {
    StatementSummaryData {
        rows_read: summary.rows_read,
        rows_analyzed: summary.rows_analyzed,
        rows_dropped: summary.rows_dropped,
    }
}

pub(crate) fn overview_data(overview: &OverviewStats) -> OverviewData {
    OverviewData {
        transaction_count: overview.transaction_count as i64,
        average_balance: overview.average_balance.map(round2),
        total_volume: round2(overview.total_volume),
    }
}

pub(crate) fn patterns_section(findings: &PatternFindings) -> PatternsSection {
    PatternsSection {
        regular_income: pattern_group_rows(&findings.regular_income),
        recurring_expenses: pattern_group_rows(&findings.recurring_expenses),
    }
}

fn pattern_group_rows(
    groups: &std::collections::BTreeMap<i64, Vec<Transaction>>,
) -> Vec<PatternGroupRow> {
    groups
        .iter()
        .map(|(amount_minor, members)| PatternGroupRow {
            amount: minor_to_amount(*amount_minor),
            occurrences: members.len() as i64,
            transactions: members.iter().map(transaction_row).collect(),
        })
        .collect()
}

pub(crate) fn fraud_section(findings: &FraudFindings) -> FraudSection {
    let high_velocity = findings
        .high_velocity
        .iter()
        .map(|(hour_bucket, members)| VelocityBucketRow {
            hour_bucket: hour_bucket.clone(),
            occurrences: members.len() as i64,
            transactions: members.iter().map(transaction_row).collect(),
        })
        .collect::<Vec<VelocityBucketRow>>();

    let velocity_total: i64 = high_velocity.iter().map(|bucket| bucket.occurrences).sum();
    let unusual_timing = findings
        .unusual_timing
        .iter()
        .map(transaction_row)
        .collect::<Vec<TransactionRow>>();
    let alert_count = velocity_total + unusual_timing.len() as i64;

    FraudSection {
        high_velocity,
        unusual_timing,
        alert_count,
    }
}

pub(crate) fn opportunities_section(findings: &OpportunityFindings) -> OpportunitiesSection {
    OpportunitiesSection {
        cross_sell: findings.cross_sell.iter().map(recommendation_row).collect(),
        up_sell: findings.up_sell.iter().map(recommendation_row).collect(),
    }
}

fn recommendation_row(recommendation: &crate::analysis::types::Recommendation) -> RecommendationRow {
    RecommendationRow {
        product: recommendation.product.clone(),
        score: recommendation.score,
        reasoning: recommendation.reasoning.clone(),
    }
}

pub(crate) fn transaction_row(transaction: &Transaction) -> TransactionRow {
    TransactionRow {
        posted_at: format_posted_at(&transaction.posted_at),
        amount: round2(transaction.amount),
        kind: transaction.kind.as_str().to_string(),
        channel: transaction.channel.clone(),
        balance: round2(transaction.balance),
    }
}

pub(crate) fn format_posted_at(posted_at: &NaiveDateTime) -> String {
    posted_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub(crate) fn minor_to_amount(amount_minor: i64) -> f64 {
    (amount_minor as f64) / 100.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
