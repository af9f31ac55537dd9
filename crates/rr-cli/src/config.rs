//! Run settings for the CLI: a TOML file plus flag overrides.
//!
//! ```toml
//! policy      = "sequential"
//! move_symbol = "M"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use rr_core::{MoveSymbol, Policy, RunConfig};

/// Load settings from `path`, or defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

pub fn parse(content: &str) -> Result<RunConfig> {
    Ok(toml::from_str(content)?)
}

/// Flags win over the file.
pub fn with_overrides(
    mut config:  RunConfig,
    policy:      Option<Policy>,
    move_symbol: Option<MoveSymbol>,
) -> RunConfig {
    if let Some(policy) = policy {
        config.policy = policy;
    }
    if let Some(move_symbol) = move_symbol {
        config.move_symbol = move_symbol;
    }
    config
}
