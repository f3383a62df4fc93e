/// Deterministic analysis policy identifier.
///
/// Emitted with every analysis payload so threshold changes remain auditable
/// in diffs and support sessions.
pub const ANALYSIS_POLICY_VERSION: &str = "analysis/v1";

/// v1 pattern-detection thresholds.
///
/// Group membership is exact minor-unit amount equality; there is no
/// tolerance band and no periodicity check.
#[derive(Debug, Clone, Copy)]
pub struct PatternPolicy {
    /// Credit transactions of one amount needed to count as regular income.
    pub min_income_occurrences: usize,
    /// Debit transactions of one amount needed to count as a recurring expense.
    pub min_expense_occurrences: usize,
}

pub const PATTERN_POLICY_V1: PatternPolicy = PatternPolicy {
    min_income_occurrences: 3,
    min_expense_occurrences: 2,
};

/// v1 fraud-screening thresholds.
#[derive(Debug, Clone, Copy)]
pub struct FraudPolicy {
    /// Per-hour-bucket transaction count above which the bucket is reported.
    pub velocity_limit: usize,
    /// First hour of the quiet window, inclusive.
    pub quiet_hours_start: u32,
    /// Last hour of the quiet window, inclusive. The window wraps midnight.
    pub quiet_hours_end: u32,
    /// Reserved knob; no heuristic reads it.
    pub large_transaction_threshold: f64,
}

impl FraudPolicy {
    /// Strictly-greater-than comparison: a bucket holding exactly the limit
    /// is not reported.
    pub fn exceeds_velocity(self, bucket_size: usize) -> bool {
        bucket_size > self.velocity_limit
    }

    /// Wraparound membership test, inclusive at both ends: with the v1
    /// window this accepts hours {23, 0, 1, 2, 3, 4}.
    pub fn is_quiet_hour(self, hour: u32) -> bool {
        hour >= self.quiet_hours_start || hour <= self.quiet_hours_end
    }
}

pub const FRAUD_POLICY_V1: FraudPolicy = FraudPolicy {
    velocity_limit: 5,
    quiet_hours_start: 23,
    quiet_hours_end: 4,
    large_transaction_threshold: 500_000.0,
};

/// v1 opportunity-scoring thresholds and recommendation scores.
///
/// All values are fixed constants, not statistically derived.
#[derive(Debug, Clone, Copy)]
pub struct OpportunityPolicy {
    /// Digital share of transactions above which the card rule fires
    /// (strict comparison).
    pub digital_ratio_threshold: f64,
    /// Mean of `balance` above which the investment rule fires.
    pub healthy_average_balance: f64,
    /// Max of `balance` above which the premium-tier rule fires.
    pub premium_peak_balance: f64,
    pub card_confidence: f64,
    pub investment_confidence: f64,
    pub premium_tier_eligibility: f64,
    /// Normalized channel labels counted as digital usage.
    pub digital_channels: &'static [&'static str],
}

impl OpportunityPolicy {
    pub fn is_digital_channel(self, normalized_channel: &str) -> bool {
        self.digital_channels
            .iter()
            .any(|channel| *channel == normalized_channel)
    }
}

pub const OPPORTUNITY_POLICY_V1: OpportunityPolicy = OpportunityPolicy {
    digital_ratio_threshold: 0.7,
    healthy_average_balance: 100_000.0,
    premium_peak_balance: 500_000.0,
    card_confidence: 0.8,
    investment_confidence: 0.75,
    premium_tier_eligibility: 0.9,
    digital_channels: &["net_banking_transfer", "upi", "card"],
};
