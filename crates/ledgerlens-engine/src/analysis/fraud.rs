use std::collections::BTreeMap;

use crate::analysis::policy::{FRAUD_POLICY_V1, FraudPolicy};
use crate::analysis::types::{FraudFindings, Transaction};

/// Runs the two independent fraud heuristics.
///
/// Velocity: transactions are bucketed by their timestamp truncated to the
/// hour; any bucket whose count strictly exceeds the velocity limit is
/// reported in full. This is an absolute per-bucket threshold, not a sliding
/// window — a burst split 4/4 across an hour boundary is not flagged.
///
/// Off-hours: a transaction is flagged when its local hour falls in the
/// inclusive wraparound quiet window (23:00 through 04:59 under v1).
///
/// The heuristics do not cross-reference each other; one transaction may
/// appear in both outputs, and no severity is assigned.
pub fn screen_fraud(transactions: &[Transaction]) -> FraudFindings {
    screen_fraud_with_policy(transactions, FRAUD_POLICY_V1)
}

pub(crate) fn screen_fraud_with_policy(
    transactions: &[Transaction],
    policy: FraudPolicy,
) -> FraudFindings {
    let mut buckets: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
    for transaction in transactions {
        buckets
            .entry(transaction.hour_bucket())
            .or_default()
            .push(transaction.clone());
    }
    buckets.retain(|_, members| policy.exceeds_velocity(members.len()));

    let unusual_timing = transactions
        .iter()
        .filter(|transaction| policy.is_quiet_hour(transaction.hour()))
        .cloned()
        .collect::<Vec<Transaction>>();

    FraudFindings {
        high_velocity: buckets,
        unusual_timing,
    }
}
