//! Rank command implementation for the carpool CLI.

use camino::{Utf8Path, Utf8PathBuf};
use carpool_core::CommuterProfile;
use carpool_recommend::{FilterConfig, MatchEngine, RECOMMENDATIONS_CAP, rank};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_RANK_FILTER, ARG_RANK_LIMIT, ARG_RANK_REQUEST, CliError, ENV_RANK_REQUEST};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a JSON-encoded candidate set against a reference \
                 commuter profile. The request file holds the reference and \
                 candidates; an optional filter file adjusts the matching \
                 thresholds the way the interactive filter panel does.",
    about = "Rank carpool candidates for a reference commuter"
)]
#[ortho_config(prefix = "CARPOOL")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing the match request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON filter configuration.
    #[arg(long = ARG_RANK_FILTER, value_name = "path")]
    #[serde(default)]
    pub(crate) filter: Option<Utf8PathBuf>,
    /// Maximum number of recommendations to emit.
    #[arg(long = ARG_RANK_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional path to a JSON filter configuration.
    pub(crate) filter: Option<Utf8PathBuf>,
    /// Result cap.
    pub(crate) limit: usize,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_RANK_REQUEST)?;
        if let Some(filter_path) = &self.filter {
            require_existing(filter_path, ARG_RANK_FILTER)?;
        }
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_REQUEST,
            env: ENV_RANK_REQUEST,
        })?;
        Ok(Self {
            request_path,
            filter: args.filter,
            limit: args.limit.unwrap_or(RECOMMENDATIONS_CAP),
        })
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

/// A reference commuter and the candidate set to rank against them.
#[derive(Debug, Deserialize)]
pub(crate) struct MatchRequest {
    pub(crate) reference: CommuterProfile,
    pub(crate) candidates: Vec<CommuterProfile>,
}

/// Run the rank command, writing ranked recommendations as JSON.
pub(crate) fn execute(config: &RankConfig, mut out: impl Write) -> Result<(), CliError> {
    let request: MatchRequest = read_json(&config.request_path)?;
    let engine = match &config.filter {
        Some(filter_path) => {
            let filter: FilterConfig = read_json(filter_path)?;
            MatchEngine::from_filter(filter.validate()?)
        }
        None => MatchEngine::new(),
    };

    let recs = rank(&engine, &request.reference, &request.candidates, config.limit);
    serde_json::to_writer_pretty(&mut out, &recs)
        .map_err(|source| CliError::WriteOutput(source.into()))?;
    out.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| CliError::DecodeInput {
        path: path.to_path_buf(),
        source,
    })
}
