use crate::analysis::policy::{OPPORTUNITY_POLICY_V1, OpportunityPolicy};
use crate::analysis::types::{OpportunityFindings, Recommendation, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecommendationTrack {
    CrossSell,
    UpSell,
}

/// Balance and channel-usage aggregates the rule predicates read.
///
/// All fields are `None`/zero on an empty statement so every predicate
/// evaluates to false instead of dividing by zero or folding an empty max.
#[derive(Debug, Clone, Copy, Default)]
struct AccountProfile {
    transaction_count: usize,
    digital_count: usize,
    average_balance: Option<f64>,
    peak_balance: Option<f64>,
}

impl AccountProfile {
    fn from_transactions(transactions: &[Transaction], policy: OpportunityPolicy) -> Self {
        if transactions.is_empty() {
            return Self::default();
        }

        let digital_count = transactions
            .iter()
            .filter(|transaction| policy.is_digital_channel(&transaction.channel))
            .count();
        let balance_total: f64 = transactions.iter().map(|t| t.balance).sum();
        let peak_balance = transactions
            .iter()
            .map(|t| t.balance)
            .fold(None, |peak: Option<f64>, balance| match peak {
                Some(current) => Some(current.max(balance)),
                None => Some(balance),
            });

        Self {
            transaction_count: transactions.len(),
            digital_count,
            average_balance: Some(balance_total / transactions.len() as f64),
            peak_balance,
        }
    }

    fn digital_ratio(self) -> f64 {
        if self.transaction_count == 0 {
            return 0.0;
        }
        (self.digital_count as f64) / (self.transaction_count as f64)
    }
}

/// One entry of the fixed rule table: an independent predicate paired with
/// a recommendation template. Rules never read each other's output.
struct OpportunityRule {
    track: RecommendationTrack,
    product: &'static str,
    reasoning: &'static str,
    score: fn(&OpportunityPolicy) -> f64,
    applies: fn(&AccountProfile, &OpportunityPolicy) -> bool,
}

fn digital_affinity_applies(profile: &AccountProfile, policy: &OpportunityPolicy) -> bool {
    profile.digital_ratio() > policy.digital_ratio_threshold
}

fn balance_health_applies(profile: &AccountProfile, policy: &OpportunityPolicy) -> bool {
    matches!(profile.average_balance, Some(average) if average > policy.healthy_average_balance)
}

fn peak_balance_applies(profile: &AccountProfile, policy: &OpportunityPolicy) -> bool {
    matches!(profile.peak_balance, Some(peak) if peak > policy.premium_peak_balance)
}

fn card_confidence(policy: &OpportunityPolicy) -> f64 {
    policy.card_confidence
}

fn investment_confidence(policy: &OpportunityPolicy) -> f64 {
    policy.investment_confidence
}

fn premium_tier_eligibility(policy: &OpportunityPolicy) -> f64 {
    policy.premium_tier_eligibility
}

const RULES: &[OpportunityRule] = &[
    OpportunityRule {
        track: RecommendationTrack::CrossSell,
        product: "Premium Credit Card",
        reasoning: "High digital transaction usage indicates comfort with cards",
        score: card_confidence,
        applies: digital_affinity_applies,
    },
    OpportunityRule {
        track: RecommendationTrack::CrossSell,
        product: "Mutual Fund Investment",
        reasoning: "Maintains healthy average balance",
        score: investment_confidence,
        applies: balance_health_applies,
    },
    OpportunityRule {
        track: RecommendationTrack::UpSell,
        product: "Premium Banking Account",
        reasoning: "High value transactions and balance maintenance",
        score: premium_tier_eligibility,
        applies: peak_balance_applies,
    },
];

/// Evaluates the fixed rule table in order over one account profile. Each
/// rule appends at most one recommendation; rules do not short-circuit each
/// other, so any subset of the three can fire on a single statement.
pub fn score_opportunities(transactions: &[Transaction]) -> OpportunityFindings {
    score_opportunities_with_policy(transactions, OPPORTUNITY_POLICY_V1)
}

pub(crate) fn score_opportunities_with_policy(
    transactions: &[Transaction],
    policy: OpportunityPolicy,
) -> OpportunityFindings {
    let profile = AccountProfile::from_transactions(transactions, policy);
    let mut findings = OpportunityFindings::default();

    for rule in RULES {
        if !(rule.applies)(&profile, &policy) {
            continue;
        }
        let recommendation = Recommendation {
            product: rule.product.to_string(),
            score: (rule.score)(&policy),
            reasoning: rule.reasoning.to_string(),
        };
        match rule.track {
            RecommendationTrack::CrossSell => findings.cross_sell.push(recommendation),
            RecommendationTrack::UpSell => findings.up_sell.push(recommendation),
        }
    }

    findings
}
