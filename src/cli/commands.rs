//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodmeter")]
#[command(about = "Daily mood check-ins from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MOODMETER_HOME/config.toml or ~/.moodmeter/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive check-in session (default)
    Start,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_starts_session() {
        let cli = Cli::parse_from(["moodmeter"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::parse_from(["moodmeter", "config", "default_mood", "sad"]);
        match cli.command {
            Some(Commands::Config { key, value, list }) => {
                assert_eq!(key.as_deref(), Some("default_mood"));
                assert_eq!(value.as_deref(), Some("sad"));
                assert!(!list);
            }
            other => panic!("Expected config command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["moodmeter", "start", "--config", "/tmp/c.toml", "-v"]);
        assert!(matches!(cli.command, Some(Commands::Start)));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["moodmeter", "-q", "-v"]).is_err());
    }
}
