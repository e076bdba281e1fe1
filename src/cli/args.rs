//! CLI argument definitions using clap
//!
//! Commands:
//! - driftview replay --config <path> [--trace]
//! - driftview classify
//! - driftview init-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration path
pub const DEFAULT_CONFIG_PATH: &str = "./driftview.json";

/// driftview - a deterministic view engine for cross-system fact comparison
#[derive(Parser, Debug)]
#[command(name = "driftview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply JSON actions from stdin (one per line) and print the final view
    Replay {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Print the view after every action
        #[arg(long)]
        trace: bool,
    },

    /// Classify one fetch payload read from stdin
    Classify,

    /// Write a configuration file holding the defaults
    InitConfig {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_defaults() {
        let cli = Cli::try_parse_from(["driftview", "replay"]).unwrap();
        match cli.command {
            Command::Replay { config, trace } => {
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert!(!trace);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_replay_with_flags() {
        let cli =
            Cli::try_parse_from(["driftview", "replay", "--config", "/etc/dv.json", "--trace"])
                .unwrap();
        assert!(matches!(cli.command, Command::Replay { trace: true, .. }));
    }

    #[test]
    fn test_init_config_subcommand_name() {
        let cli = Cli::try_parse_from(["driftview", "init-config"]).unwrap();
        assert!(matches!(cli.command, Command::InitConfig { .. }));
    }
}
