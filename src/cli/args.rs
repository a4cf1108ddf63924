use crate::driver::RunSettings;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Terminal banking session over the demo accounts
#[derive(Parser, Debug)]
#[command(name = "securebank")]
#[command(about = "Log in, deposit, withdraw and use the ATM screen from a terminal", long_about = None)]
pub struct CliArgs {
    /// Session script to run instead of reading commands from stdin
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "CSV script with columns action,account,pin,amount,description"
    )]
    pub script: Option<PathBuf>,

    /// Where to write the transaction log of the session active at the end
    #[arg(
        long = "statement",
        value_name = "FILE",
        help = "Write the final session's transaction log to this CSV file"
    )]
    pub statement: Option<PathBuf>,

    /// Date stamped on new transactions
    #[arg(
        long = "today",
        value_name = "YYYY-MM-DD",
        help = "Use this date instead of the local date for new transactions"
    )]
    pub today: Option<NaiveDate>,
}

impl CliArgs {
    /// Create RunSettings from CLI arguments
    pub fn to_run_settings(&self) -> RunSettings {
        RunSettings {
            script: self.script.clone(),
            statement: self.statement.clone(),
            today: self.today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_options(&["program"], None, None)]
    #[case::script(&["program", "--script", "session.csv"], Some("session.csv"), None)]
    #[case::statement(&["program", "--statement", "out.csv"], None, Some("out.csv"))]
    #[case::both(
        &["program", "--script", "session.csv", "--statement", "out.csv"],
        Some("session.csv"),
        Some("out.csv")
    )]
    fn test_path_options(
        #[case] args: &[&str],
        #[case] script: Option<&str>,
        #[case] statement: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.script, script.map(PathBuf::from));
        assert_eq!(parsed.statement, statement.map(PathBuf::from));
    }

    #[test]
    fn test_today_parsing() {
        let parsed = CliArgs::try_parse_from(["program", "--today", "2024-03-01"]).unwrap();
        let settings = parsed.to_run_settings();
        assert_eq!(settings.today, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(settings.script, None);
    }

    #[rstest]
    #[case::bad_date(&["program", "--today", "01/03/2024"])]
    #[case::impossible_date(&["program", "--today", "2024-02-30"])]
    #[case::positional(&["program", "session.csv"])]
    #[case::unknown_flag(&["program", "--strategy", "sync"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
