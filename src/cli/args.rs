use crate::replay::{OutputKind, ReplayConfig};
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay deposits and withdrawals against a single wallet account
#[derive(Parser, Debug)]
#[command(name = "wallet-engine")]
#[command(about = "Replay deposits and withdrawals against a wallet account", long_about = None)]
pub struct CliArgs {
    /// Operations CSV file (`type,amount`)
    #[arg(value_name = "INPUT", help = "Path to the operations CSV file")]
    pub input_file: PathBuf,

    /// Balance the account starts with
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value = "0",
        help = "Starting balance of the account"
    )]
    pub initial_balance: Decimal,

    /// Movement history to rehydrate before replaying
    #[arg(
        long = "history",
        value_name = "PATH",
        help = "Movement history CSV (`date,type,amount`) loaded without validation"
    )]
    pub history: Option<PathBuf>,

    /// Pin "today" instead of reading the system calendar
    #[arg(
        long = "today",
        value_name = "YYYY-MM-DD",
        help = "Date recorded on new movements (default: the local date)"
    )]
    pub today: Option<NaiveDate>,

    /// Output view
    #[arg(
        long = "output",
        value_name = "VIEW",
        default_value = "summary",
        help = "Output view: 'summary' for one balance row or 'movements' for the full history"
    )]
    pub output: OutputKind,
}

impl CliArgs {
    pub fn to_replay_config(&self) -> ReplayConfig {
        ReplayConfig {
            input: self.input_file.clone(),
            initial_balance: self.initial_balance,
            history: self.history.clone(),
            output: self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program", "ops.csv"]).unwrap();

        assert_eq!(parsed.input_file, PathBuf::from("ops.csv"));
        assert_eq!(parsed.initial_balance, Decimal::ZERO);
        assert_eq!(parsed.history, None);
        assert_eq!(parsed.today, None);
        assert_eq!(parsed.output, OutputKind::Summary);
    }

    #[rstest]
    #[case::summary(&["program", "--output", "summary", "ops.csv"], OutputKind::Summary)]
    #[case::movements(&["program", "--output", "movements", "ops.csv"], OutputKind::Movements)]
    fn test_output_parsing(#[case] args: &[&str], #[case] expected: OutputKind) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.output, expected);
    }

    #[test]
    fn test_all_options() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--initial-balance",
            "5000.50",
            "--history",
            "history.csv",
            "--today",
            "2024-05-10",
            "ops.csv",
        ])
        .unwrap();

        assert_eq!(parsed.initial_balance, Decimal::from_str("5000.50").unwrap());
        assert_eq!(parsed.history, Some(PathBuf::from("history.csv")));
        assert_eq!(parsed.today, NaiveDate::from_ymd_opt(2024, 5, 10));

        let config = parsed.to_replay_config();
        assert_eq!(config.input, PathBuf::from("ops.csv"));
        assert_eq!(config.initial_balance, parsed.initial_balance);
        assert_eq!(config.history, parsed.history);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_output(&["program", "--output", "xml", "ops.csv"])]
    #[case::invalid_balance(&["program", "--initial-balance", "lots", "ops.csv"])]
    #[case::invalid_date(&["program", "--today", "10/05/2024", "ops.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
