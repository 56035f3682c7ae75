use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{IconError, IconResult};

pub const DEFAULT_ROUND_RATE: i64 = 5;

/// Defaults loaded from an optional TOML file. Command-line flags win over
/// anything set here.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub round: RoundConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct RoundConfig {
    /// Round the corners before encoding (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// Side length divided by this gives the corner radius (default: 5)
    #[serde(default = "default_round_rate")]
    pub rate: i64,

    /// Smooth the mask to anti-alias the corners (default: true)
    #[serde(default = "default_true")]
    pub smooth: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rate: DEFAULT_ROUND_RATE,
            smooth: true,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Shrink images larger than the ICO limit instead of failing (default: true)
    #[serde(default = "default_true")]
    pub downscale: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { downscale: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_round_rate() -> i64 {
    DEFAULT_ROUND_RATE
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

/// Resolved settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub round: bool,
    pub round_rate: i64,
    pub smooth: bool,
    pub downscale: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Options {
    pub fn from_config(config: &Config) -> Self {
        Self {
            round: config.round.enabled,
            round_rate: config.round.rate,
            smooth: config.round.smooth,
            downscale: config.output.downscale,
        }
    }

    /// Layers the command-line flags over `config`.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let mut options = Self::from_config(config);
        options.round |= cli.round;
        if let Some(rate) = cli.round_rate {
            options.round_rate = rate;
        }
        if cli.no_smooth {
            options.smooth = false;
        }
        if cli.no_downscale {
            options.downscale = false;
        }
        options
    }

    pub fn validate(&self) -> IconResult<()> {
        if self.round_rate <= 0 {
            return Err(IconError::invalid_argument(format!(
                "round rate must be a positive integer, got {}",
                self.round_rate
            )));
        }
        Ok(())
    }

    /// Corner radius for a square of side `side`.
    pub fn radius_for(&self, side: u32) -> IconResult<u32> {
        self.validate()?;
        let radius = i64::from(side) / self.round_rate;
        Ok(radius as u32)
    }
}
