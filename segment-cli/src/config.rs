//! Configuration loading
//!
//! Reads a [`DisplayConfig`] from TOML. Without a file, the sample
//! configuration compiled into the binary is used.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::info;
use segment_core::config::DisplayConfig;

/// Embedded default configuration
/// Edit segment.toml and rebuild to change the defaults
pub const EMBEDDED_CONFIG: &str = include_str!("../segment.toml");

/// Parse and validate a TOML configuration
pub fn parse_config(text: &str) -> anyhow::Result<DisplayConfig> {
    let config: DisplayConfig = toml::from_str(text).context("invalid TOML configuration")?;
    config.validate().context("invalid display configuration")?;
    Ok(config)
}

/// Load the configuration from `path`, or the embedded one if `None`
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DisplayConfig> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_config(&text).with_context(|| format!("in {}", path.display()))
        }
        None => {
            info!("Using embedded config");
            parse_config(EMBEDDED_CONFIG)
        }
    }
}
