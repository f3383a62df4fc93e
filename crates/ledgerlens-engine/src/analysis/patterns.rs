use std::collections::BTreeMap;

use crate::analysis::policy::{PATTERN_POLICY_V1, PatternPolicy};
use crate::analysis::types::{PatternFindings, Transaction, TransactionKind};

/// Partitions the statement into Credit and Debit subsets and groups each by
/// exact minor-unit amount. Credit groups at or above the income threshold
/// become regular-income series; Debit groups at or above the expense
/// threshold become recurring-expense series. Groups below threshold are
/// silently excluded.
///
/// Date spacing is ignored: three same-amount credits anywhere in the
/// history qualify, with no periodicity check.
pub fn detect_patterns(transactions: &[Transaction]) -> PatternFindings {
    detect_patterns_with_policy(transactions, PATTERN_POLICY_V1)
}

pub(crate) fn detect_patterns_with_policy(
    transactions: &[Transaction],
    policy: PatternPolicy,
) -> PatternFindings {
    let mut credit_groups: BTreeMap<i64, Vec<Transaction>> = BTreeMap::new();
    let mut debit_groups: BTreeMap<i64, Vec<Transaction>> = BTreeMap::new();

    for transaction in transactions {
        let groups = match transaction.kind {
            TransactionKind::Credit => &mut credit_groups,
            TransactionKind::Debit => &mut debit_groups,
        };
        groups
            .entry(transaction.amount_minor())
            .or_default()
            .push(transaction.clone());
    }

    credit_groups.retain(|_, members| members.len() >= policy.min_income_occurrences);
    debit_groups.retain(|_, members| members.len() >= policy.min_expense_occurrences);

    PatternFindings {
        regular_income: credit_groups,
        recurring_expenses: debit_groups,
    }
}
