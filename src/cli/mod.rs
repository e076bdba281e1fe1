//! CLI module for driftview
//!
//! Provides command-line interface for:
//! - replay: apply a stream of view actions
//! - classify: classify one fetch payload
//! - init-config: write a default configuration file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{
    classify, classify_value, init_config, load_config, replay, replay_from, run, run_command,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_document, read_lines, write_response};
