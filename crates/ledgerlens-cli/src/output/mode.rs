use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Analyze { json, .. }
        | Commands::Patterns { json, .. }
        | Commands::Fraud { json, .. }
        | Commands::Opportunities { json, .. } => *json,
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn mode_uses_json_only_when_the_flag_is_present() {
        let cases: [(&[&str], OutputMode); 4] = [
            (
                &["ledgerlens", "analyze", "s.csv", "--json"],
                OutputMode::Json,
            ),
            (&["ledgerlens", "analyze", "s.csv"], OutputMode::Text),
            (
                &["ledgerlens", "fraud", "s.csv", "--json"],
                OutputMode::Json,
            ),
            (&["ledgerlens", "opportunities", "s.csv"], OutputMode::Text),
        ];

        for (args, expected) in cases {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), expected);
            }
        }
    }
}
