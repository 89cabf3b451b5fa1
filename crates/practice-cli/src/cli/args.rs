use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "practice", about = "Log practice sessions and total your practice time", version)]
pub struct Cli {
    /// Session log file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log a session for today
    Add {
        /// Session length in minutes (1-1440)
        #[arg(allow_negative_numbers = true)]
        duration: i64,
    },

    /// List logged sessions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show total practice time
    Total {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_duration() {
        let cli = Cli::try_parse_from(["practice", "add", "45"]).unwrap();
        assert!(matches!(cli.command, Command::Add { duration: 45 }));
        assert!(cli.file.is_none());
    }

    #[test]
    fn negative_duration_reaches_validation() {
        let cli = Cli::try_parse_from(["practice", "add", "-5"]).unwrap();
        assert!(matches!(cli.command, Command::Add { duration: -5 }));
    }

    #[test]
    fn file_flag_is_global() {
        let cli = Cli::try_parse_from(["practice", "total", "--file", "log.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("log.txt")));
        assert!(matches!(cli.command, Command::Total { json: false }));
    }

    #[test]
    fn rejects_bad_invocations() {
        for args in [
            &["practice"][..],
            &["practice", "remove"],
            &["practice", "add"],
            &["practice", "add", "ten"],
            &["practice", "list", "extra"],
        ] {
            assert!(Cli::try_parse_from(args.iter().copied()).is_err(), "{args:?} should fail");
        }
    }
}
