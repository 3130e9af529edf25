//! recurra_cli - command-line shell around recurra_core.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod report;

pub use config::Config;
pub use error::{CliError, Result};
