//! Command-line interface for offline carpool match ranking.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use thiserror::Error;

mod rank;

pub(crate) const ARG_RANK_REQUEST: &str = "request";
pub(crate) const ARG_RANK_FILTER: &str = "filter";
pub(crate) const ARG_RANK_LIMIT: &str = "limit";
pub(crate) const ENV_RANK_REQUEST: &str = "CARPOOL_CMDS_RANK_REQUEST_PATH";

/// Run the carpool CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] for argument, configuration, I/O, and decoding
/// failures.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => {
            let config = args.into_config()?;
            config.validate_sources()?;
            let stdout = std::io::stdout().lock();
            rank::execute(&config, stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "carpool",
    about = "Offline match ranking for carpool commuter profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a candidate set against a reference commuter.
    Rank(rank::RankArgs),
}

/// Errors emitted by the carpool CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// The unresolved option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// Which option referenced the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// Reading an input file failed.
    #[error("failed to read {path}")]
    ReadInput {
        /// The unreadable path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding an input file as JSON failed.
    #[error("failed to decode {path}")]
    DecodeInput {
        /// The undecodable path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The supplied filter configuration was unusable.
    #[error("invalid filter configuration")]
    InvalidFilter(#[from] carpool_recommend::FilterError),
    /// Writing the ranked output failed.
    #[error("failed to write ranked output")]
    WriteOutput(#[source] std::io::Error),
}

#[cfg(test)]
mod tests;
