use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_patterns(data: &Value) -> io::Result<String> {
    let mut lines = patterns_body(data)?;
    lines.push(String::new());
    lines.extend(summary_lines(data));
    Ok(lines.join("\n"))
}

pub fn render_fraud(data: &Value) -> io::Result<String> {
    let mut lines = fraud_body(data)?;
    lines.push(String::new());
    lines.extend(summary_lines(data));
    Ok(lines.join("\n"))
}

pub fn render_opportunities(data: &Value) -> io::Result<String> {
    let mut lines = opportunities_body(data)?;
    lines.push(String::new());
    lines.extend(summary_lines(data));
    Ok(lines.join("\n"))
}

pub fn render_analyze(data: &Value) -> io::Result<String> {
    let mut lines = vec!["Statement report".to_string(), String::new()];

    lines.push("Overview:".to_string());
    lines.extend(overview_lines(data));

    for body in [
        patterns_body(data)?,
        fraud_body(data)?,
        opportunities_body(data)?,
    ] {
        lines.push(String::new());
        lines.extend(body);
    }

    let trend = rows_of(data, "balance_trend");
    if !trend.is_empty() {
        lines.push(String::new());
        lines.push("Daily balances:".to_string());

        let columns = [
            Column {
                name: "Day",
                align: Align::Left,
            },
            Column {
                name: "Balance",
                align: Align::Right,
            },
        ];
        let table_rows = trend
            .iter()
            .map(|row| {
                vec![
                    string_cell(row, "day"),
                    format_amount(row.get("balance").and_then(Value::as_f64).unwrap_or(0.0)),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(format::render_table(&columns, &table_rows));
    }

    lines.push(String::new());
    lines.extend(summary_lines(data));
    Ok(lines.join("\n"))
}

fn patterns_body(data: &Value) -> io::Result<Vec<String>> {
    let section = data
        .get("patterns")
        .ok_or_else(|| io::Error::other("patterns output requires a patterns section"))?;
    let income = rows_of(section, "regular_income");
    let expenses = rows_of(section, "recurring_expenses");

    if income.is_empty() && expenses.is_empty() {
        return Ok(vec![
            "No transaction patterns found.".to_string(),
            String::new(),
            "Regular income needs at least 3 credits of the same amount, and a".to_string(),
            "recurring expense needs at least 2 debits of the same amount.".to_string(),
        ]);
    }

    let mut lines = vec![format!(
        "{} regular income group(s), {} recurring expense group(s) detected.",
        income.len(),
        expenses.len()
    )];

    if !income.is_empty() {
        lines.push(String::new());
        lines.push("Regular income:".to_string());
        lines.extend(group_table(&income));
    }

    if !expenses.is_empty() {
        lines.push(String::new());
        lines.push("Recurring expenses:".to_string());
        lines.extend(group_table(&expenses));
    }

    Ok(lines)
}

fn fraud_body(data: &Value) -> io::Result<Vec<String>> {
    let section = data
        .get("fraud")
        .ok_or_else(|| io::Error::other("fraud output requires a fraud section"))?;
    let velocity = rows_of(section, "high_velocity");
    let timing = rows_of(section, "unusual_timing");

    if velocity.is_empty() && timing.is_empty() {
        return Ok(vec![
            "No fraud indicators found.".to_string(),
            String::new(),
            "No hour held more than 5 transactions and nothing posted between".to_string(),
            "23:00 and 04:59.".to_string(),
        ]);
    }

    let alert_count = section
        .get("alert_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let mut lines = vec![format!("{alert_count} transaction(s) flagged for review.")];

    if !velocity.is_empty() {
        lines.push(String::new());
        lines.push("High velocity hours:".to_string());

        let columns = [
            Column {
                name: "Hour",
                align: Align::Left,
            },
            Column {
                name: "Txns",
                align: Align::Right,
            },
        ];
        let table_rows = velocity
            .iter()
            .map(|row| {
                vec![
                    string_cell(row, "hour_bucket"),
                    row.get("occurrences")
                        .and_then(Value::as_u64)
                        .unwrap_or(0)
                        .to_string(),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(format::render_table(&columns, &table_rows));
    }

    if !timing.is_empty() {
        lines.push(String::new());
        lines.push("Unusual timing (23:00-04:59):".to_string());
        lines.extend(transaction_table(&timing));
    }

    Ok(lines)
}

fn opportunities_body(data: &Value) -> io::Result<Vec<String>> {
    let section = data
        .get("opportunities")
        .ok_or_else(|| io::Error::other("opportunities output requires an opportunities section"))?;
    let cross_sell = rows_of(section, "cross_sell");
    let up_sell = rows_of(section, "up_sell");

    if cross_sell.is_empty() && up_sell.is_empty() {
        return Ok(vec![
            "No product recommendations for this statement.".to_string(),
            String::new(),
            "The statement did not meet any of the digital-usage or balance".to_string(),
            "thresholds the recommendation rules look for.".to_string(),
        ]);
    }

    let mut lines = vec![format!(
        "{} recommendation(s) for this statement.",
        cross_sell.len() + up_sell.len()
    )];

    if !cross_sell.is_empty() {
        lines.push(String::new());
        lines.push("Cross-sell:".to_string());
        lines.extend(recommendation_table(&cross_sell));
    }

    if !up_sell.is_empty() {
        lines.push(String::new());
        lines.push("Up-sell:".to_string());
        lines.extend(recommendation_table(&up_sell));
    }

    Ok(lines)
}

fn overview_lines(data: &Value) -> Vec<String> {
    let overview = data.get("overview").cloned().unwrap_or(Value::Null);
    let average = match overview.get("average_balance") {
        Some(Value::Number(number)) => format_amount(number.as_f64().unwrap_or(0.0)),
        _ => "n/a".to_string(),
    };
    format::key_value_rows(
        &[
            (
                "Transactions:",
                overview
                    .get("transaction_count")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
            ),
            ("Average balance:", average),
            (
                "Total volume:",
                format_amount(
                    overview
                        .get("total_volume")
                        .and_then(Value::as_f64)
                        .unwrap_or(0.0),
                ),
            ),
        ],
        2,
    )
}

fn group_table(groups: &[Value]) -> Vec<String> {
    let columns = [
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Occurrences",
            align: Align::Right,
        },
    ];
    let table_rows = groups
        .iter()
        .map(|group| {
            vec![
                format_amount(group.get("amount").and_then(Value::as_f64).unwrap_or(0.0)),
                group
                    .get("occurrences")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &table_rows)
}

fn transaction_table(rows: &[Value]) -> Vec<String> {
    let columns = [
        Column {
            name: "Posted",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Type",
            align: Align::Left,
        },
        Column {
            name: "Channel",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                string_cell(row, "posted_at"),
                format_amount(row.get("amount").and_then(Value::as_f64).unwrap_or(0.0)),
                string_cell(row, "kind"),
                string_cell(row, "channel"),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &table_rows)
}

fn recommendation_table(rows: &[Value]) -> Vec<String> {
    let columns = [
        Column {
            name: "Product",
            align: Align::Left,
        },
        Column {
            name: "Score",
            align: Align::Right,
        },
        Column {
            name: "Reasoning",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                string_cell(row, "product"),
                format!(
                    "{:.2}",
                    row.get("score").and_then(Value::as_f64).unwrap_or(0.0)
                ),
                string_cell(row, "reasoning"),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &table_rows)
}

fn summary_lines(data: &Value) -> Vec<String> {
    let summary = data.get("summary").cloned().unwrap_or(Value::Null);
    let mut lines = vec!["Summary:".to_string()];
    lines.extend(format::key_value_rows(
        &[
            ("Rows read:", count_cell(&summary, "rows_read")),
            ("Rows analyzed:", count_cell(&summary, "rows_analyzed")),
            ("Rows dropped:", count_cell(&summary, "rows_dropped")),
        ],
        2,
    ));
    lines
}

fn rows_of(value: &Value, key: &str) -> Vec<Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn string_cell(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn count_cell(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_u64)
        .unwrap_or(0)
        .to_string()
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
