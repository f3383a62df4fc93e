use ledgerlens_engine::commands;
use ledgerlens_engine::commands::analyze::AnalyzeRunOptions;
use ledgerlens_engine::{EngineResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, IsoDate};

pub fn dispatch(cli: &Cli) -> EngineResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Analyze {
            path,
            balances,
            from,
            to,
            ..
        } => commands::analyze::run_with_options(AnalyzeRunOptions {
            path: path.clone(),
            balances_path: balances.clone(),
            from: from.as_ref().map(|value| value.as_str().to_string()),
            to: to.as_ref().map(|value| value.as_str().to_string()),
        }),
        Commands::Patterns { path, from, to, .. } => {
            commands::patterns::run(path, date_arg(from), date_arg(to))
        }
        Commands::Fraud { path, from, to, .. } => {
            commands::fraud::run(path, date_arg(from), date_arg(to))
        }
        Commands::Opportunities { path, from, to, .. } => {
            commands::opportunities::run(path, date_arg(from), date_arg(to))
        }
    }
}

fn date_arg(value: &Option<IsoDate>) -> Option<&str> {
    value.as_ref().map(IsoDate::as_str)
}
