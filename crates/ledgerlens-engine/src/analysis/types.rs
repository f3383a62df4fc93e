use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "credit" => Some(Self::Credit),
            "debit" => Some(Self::Debit),
            _ => None,
        }
    }
}

/// One statement line. The ingest layer guarantees `posted_at` and `amount`
/// are valid before a transaction reaches any analysis pass.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub posted_at: NaiveDateTime,
    pub amount: f64,
    pub kind: TransactionKind,
    /// Normalized origin channel (lowercase, `_`-separated). Only the
    /// opportunity scorer reads this.
    pub channel: String,
    /// Running account balance at the time of the transaction.
    pub balance: f64,
}

impl Transaction {
    /// Amount in fixed-precision minor units (hundredths). Grouping keys use
    /// this rather than f64 equality, so 499.99 and 500.00 stay distinct
    /// series without rounding false-negatives inside one series.
    pub fn amount_minor(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }

    pub fn hour(&self) -> u32 {
        self.posted_at.hour()
    }

    /// Timestamp truncated to year-month-day-hour, the velocity grouping key.
    pub fn hour_bucket(&self) -> String {
        self.posted_at.format("%Y-%m-%d-%H").to_string()
    }
}

/// Lowercases and collapses whitespace runs to `_`, so `Net Banking
/// Transfer`, `UPI`, and `upi` compare uniformly in the channel rules.
pub fn normalize_channel(raw: &str) -> String {
    raw.trim()
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<String>>()
        .join("_")
}

/// One point of the optional end-of-day balance series. Reported as-is,
/// never fed into the analysis passes.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBalance {
    pub day: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PatternFindings {
    /// Minor-unit amount -> the Credit transactions sharing it, in input order.
    pub regular_income: BTreeMap<i64, Vec<Transaction>>,
    /// Minor-unit amount -> the Debit transactions sharing it, in input order.
    pub recurring_expenses: BTreeMap<i64, Vec<Transaction>>,
}

#[derive(Debug, Clone, Default)]
pub struct FraudFindings {
    /// Hour bucket -> every transaction in a bucket over the velocity limit.
    pub high_velocity: BTreeMap<String, Vec<Transaction>>,
    pub unusual_timing: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub product: String,
    /// Confidence (cross-sell) or eligibility (up-sell), in [0, 1].
    pub score: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Default)]
pub struct OpportunityFindings {
    pub cross_sell: Vec<Recommendation>,
    pub up_sell: Vec<Recommendation>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewStats {
    pub transaction_count: usize,
    pub average_balance: Option<f64>,
    pub total_volume: f64,
}

/// One full analysis result, built fresh per call and never mutated after.
#[derive(Debug, Clone, Default)]
pub struct StatementAnalysis {
    pub overview: OverviewStats,
    pub patterns: PatternFindings,
    pub fraud: FraudFindings,
    pub opportunities: OpportunityFindings,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::{Transaction, TransactionKind, normalize_channel};

    fn txn(posted_at: &str, amount: f64) -> Transaction {
        let parsed = NaiveDateTime::parse_from_str(posted_at, "%Y-%m-%d %H:%M:%S");
        assert!(parsed.is_ok());
        Transaction {
            posted_at: parsed.unwrap_or(NaiveDateTime::MIN),
            amount,
            kind: TransactionKind::Credit,
            channel: "card".to_string(),
            balance: 0.0,
        }
    }

    #[test]
    fn amount_minor_keeps_near_equal_amounts_distinct() {
        assert_eq!(txn("2026-01-05 10:00:00", 499.99).amount_minor(), 49_999);
        assert_eq!(txn("2026-01-05 10:00:00", 500.00).amount_minor(), 50_000);
    }

    #[test]
    fn hour_bucket_truncates_minutes_and_seconds() {
        let first = txn("2026-01-05 14:01:10", 10.0);
        let second = txn("2026-01-05 14:59:59", 10.0);
        assert_eq!(first.hour_bucket(), "2026-01-05-14");
        assert_eq!(first.hour_bucket(), second.hour_bucket());
        assert_ne!(txn("2026-01-05 15:00:00", 10.0).hour_bucket(), first.hour_bucket());
    }

    #[test]
    fn channel_normalization_unifies_case_and_spacing() {
        assert_eq!(normalize_channel("Net Banking Transfer"), "net_banking_transfer");
        assert_eq!(normalize_channel("  UPI "), "upi");
        assert_eq!(normalize_channel("Card"), "card");
    }

    #[test]
    fn kind_parsing_is_case_and_whitespace_tolerant() {
        assert_eq!(TransactionKind::parse(" Credit "), Some(TransactionKind::Credit));
        assert_eq!(TransactionKind::parse("DEBIT"), Some(TransactionKind::Debit));
        assert_eq!(TransactionKind::parse("transfer"), None);
    }
}
