use chrono::{NaiveDate, NaiveDateTime};

use crate::analysis::types::{Transaction, TransactionKind, normalize_channel};
use crate::ingest::{LoadedStatement, StatementSummary};
use crate::ingest::parse::ParsedRow;

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Applies the upstream input contract: rows with an unparseable date,
/// amount, or type are dropped (and counted) before the engine runs. The
/// analysis passes never validate these fields themselves.
pub(crate) fn normalize_rows(parsed_rows: Vec<ParsedRow>) -> LoadedStatement {
    let rows_read = parsed_rows.len() as i64;
    let mut transactions = Vec::new();

    for raw in parsed_rows {
        let Some(transaction) = normalize_row(raw) else {
            continue;
        };
        transactions.push(transaction);
    }

    let rows_analyzed = transactions.len() as i64;
    LoadedStatement {
        transactions,
        summary: StatementSummary {
            rows_read,
            rows_analyzed,
            rows_dropped: rows_read - rows_analyzed,
        },
    }
}

fn normalize_row(raw: ParsedRow) -> Option<Transaction> {
    let posted_at = parse_posted_at(raw.date.as_deref()?)?;
    let amount = parse_decimal(raw.amount.as_deref()?)?;
    let kind = TransactionKind::parse(raw.kind.as_deref()?)?;

    let channel = match raw.channel.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => normalize_channel(value),
        _ => "unknown".to_string(),
    };

    // Balance is optional; when the field is present but unparseable the row
    // is dropped rather than poisoning the balance aggregates with a zero.
    let balance = match raw.balance.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => parse_decimal(value)?,
        _ => 0.0,
    };

    Some(Transaction {
        posted_at,
        amount,
        kind,
        channel,
        balance,
    })
}

fn parse_posted_at(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    // Bare dates are valid and land on midnight.
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parse_decimal(value: &str) -> Option<f64> {
    let parsed = value.trim().replace(',', "").parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::super::parse::ParsedRow;
    use super::normalize_rows;

    fn raw(
        date: Option<&str>,
        amount: Option<&str>,
        kind: Option<&str>,
        channel: Option<&str>,
        balance: Option<&str>,
    ) -> ParsedRow {
        ParsedRow {
            date: date.map(str::to_string),
            amount: amount.map(str::to_string),
            kind: kind.map(str::to_string),
            channel: channel.map(str::to_string),
            balance: balance.map(str::to_string),
        }
    }

    #[test]
    fn valid_rows_normalize_channel_and_kind() {
        let loaded = normalize_rows(vec![raw(
            Some("2026-01-15 10:30:00"),
            Some("500.25"),
            Some(" Credit "),
            Some("Net Banking Transfer"),
            Some("12,500.00"),
        )]);

        assert_eq!(loaded.summary.rows_read, 1);
        assert_eq!(loaded.summary.rows_analyzed, 1);
        assert_eq!(loaded.summary.rows_dropped, 0);
        assert_eq!(loaded.transactions[0].channel, "net_banking_transfer");
        assert_eq!(loaded.transactions[0].balance, 12_500.0);
    }

    #[test]
    fn contract_violations_are_dropped_and_counted() {
        let loaded = normalize_rows(vec![
            raw(Some("2026-01-15"), Some("100"), Some("Debit"), None, None),
            raw(Some("not-a-date"), Some("100"), Some("Debit"), None, None),
            raw(Some("2026-01-16"), Some("abc"), Some("Debit"), None, None),
            raw(Some("2026-01-17"), Some("100"), Some("Transfer"), None, None),
            raw(None, Some("100"), Some("Debit"), None, None),
        ]);

        assert_eq!(loaded.summary.rows_read, 5);
        assert_eq!(loaded.summary.rows_analyzed, 1);
        assert_eq!(loaded.summary.rows_dropped, 4);
    }

    #[test]
    fn bare_dates_land_on_midnight() {
        let loaded = normalize_rows(vec![raw(
            Some("2026-01-15"),
            Some("100"),
            Some("Debit"),
            None,
            None,
        )]);

        assert_eq!(loaded.transactions[0].posted_at.hour(), 0);
    }

    #[test]
    fn unparseable_balance_field_drops_the_row() {
        let loaded = normalize_rows(vec![raw(
            Some("2026-01-15"),
            Some("100"),
            Some("Debit"),
            None,
            Some("n/a"),
        )]);

        assert_eq!(loaded.summary.rows_dropped, 1);
        assert!(loaded.transactions.is_empty());
    }

    #[test]
    fn missing_channel_defaults_to_unknown() {
        let loaded = normalize_rows(vec![raw(
            Some("2026-01-15"),
            Some("100"),
            Some("Debit"),
            None,
            None,
        )]);

        assert_eq!(loaded.transactions[0].channel, "unknown");
    }
}
