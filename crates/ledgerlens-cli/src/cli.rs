use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// Extended help shown after `ledgerlens analyze --help`.
/// Contains the statement schema and next-step instructions.
pub const ANALYZE_AFTER_HELP: &str = "\
How analysis works:
  Ledgerlens does not parse raw bank PDFs or provider-specific exports.
  You parse each statement into a normalized file, then point a command at it.

  Accepted formats:
    JSON — one top-level array of transaction objects
    CSV  — one header row with schema field names

  <path> is a local file path. One command call reads one statement file.
  For multiple statements, combine them first or run multiple commands.

What to do next:
  1. Parse your source into normalized JSON or schema-matching CSV.
  2. Run `ledgerlens analyze <path>` for the full report, or a focused
     command (`patterns`, `fraud`, `opportunities`) for one pass.
  3. Add `--json` when feeding the output into another tool.

Statement schema:
  JSON example (one top-level array):
  [
    {
      \"date\": \"2026-01-15 09:30:00\",
      \"amount\": 50000,
      \"type\": \"Credit\",
      \"channel\": \"Net Banking Transfer\",
      \"balance\": 125000.50
    }
  ]

  CSV example (header + rows):
  date,amount,type,channel,balance
  2026-01-15 09:30:00,50000,Credit,Net Banking Transfer,125000.50
  2026-01-16 20:05:00,1200,Debit,UPI,123800.50

Field rules (very explicit):
  date (required):
    `YYYY-MM-DD HH:MM:SS` preferred. `YYYY-MM-DD HH:MM`, the `T`-separated
    variants, and a bare `YYYY-MM-DD` (treated as midnight) are accepted.

  amount (required):
    A positive number. Direction comes from `type`, not the sign.
    Use at most 2 decimal places; amounts are grouped at paisa precision.

  type (required):
    `Credit` (money in) or `Debit` (money out). Case-insensitive.

  channel (optional):
    Free-text channel label, e.g. `UPI`, `Card`, `Net Banking Transfer`,
    `Branch Cash`. Normalized to lowercase with underscores. Rows without
    a channel are treated as `unknown` and never count as digital.

  balance (optional):
    Account balance after the transaction posted. Used for the overview
    averages and the balance-driven opportunity rules. Rows with a
    present-but-unparseable balance are dropped and counted.

Rows that violate the schema are dropped and reported in the summary
counts; they never fail the command.

Daily balances (analyze only):
  `--balances <path>` accepts a CSV with `day,balance` headers. The series
  is echoed back in the report unchanged; no pass reads it.
";

#[derive(Debug, Parser)]
#[command(
    name = "ledgerlens",
    version,
    about = "bank statement intelligence layer",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every analysis pass over a statement and assemble one report
    #[command(after_long_help = ANALYZE_AFTER_HELP)]
    Analyze {
        /// Path to a normalized JSON or CSV statement file
        path: String,
        /// Optional daily balance CSV echoed back in the report
        #[arg(long)]
        balances: Option<String>,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Detect regular income and recurring expense groups in a statement
    Patterns {
        /// Path to a normalized JSON or CSV statement file
        path: String,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Screen a statement for velocity bursts and odd-hours activity
    Fraud {
        /// Path to a normalized JSON or CSV statement file
        path: String,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Score a statement against the product recommendation rules
    Opportunities {
        /// Path to a normalized JSON or CSV statement file
        path: String,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
