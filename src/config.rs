//! Runtime configuration.
//!
//! Layered as defaults, then an optional JSON file, then environment
//! overrides. Every error names the source that produced it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::types::DEFAULT_TICK_MS;

/// Env var naming a JSON config file when no path is given on the command line.
pub const CONFIG_ENV: &str = "BLOCKFALL_CONFIG";
pub const TICK_MS_ENV: &str = "BLOCKFALL_TICK_MS";
pub const SEED_ENV: &str = "BLOCKFALL_SEED";
pub const LOG_ENV: &str = "BLOCKFALL_LOG";

/// Widest board cell accepted, in terminal columns.
pub const MAX_CELL_WIDTH: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Gravity period in milliseconds.
    pub tick_ms: u64,
    /// Piece generator seed. Derived from the wall clock when absent.
    pub seed: Option<u32>,
    pub log_file: PathBuf,
    /// `EnvFilter` directive, e.g. `warn` or `blockfall_core=debug`.
    pub log_level: String,
    /// Terminal columns per board cell.
    pub cell_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
            log_file: PathBuf::from("blockfall.log"),
            log_level: "warn".to_string(),
            cell_width: 2,
        }
    }
}

impl Config {
    /// Load the full layered configuration.
    ///
    /// `path` takes precedence over `BLOCKFALL_CONFIG`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match path.or(env_path.as_deref()) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup` so tests need not touch
    /// the process environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(TICK_MS_ENV) {
            self.tick_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{TICK_MS_ENV}={raw:?} is not a number"))?;
        }
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw
                .trim()
                .parse()
                .with_context(|| format!("{SEED_ENV}={raw:?} is not a u32"))?;
            self.seed = Some(seed);
        }
        if let Some(raw) = lookup(LOG_ENV) {
            self.log_level = raw;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than zero");
        }
        if !(1..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            bail!(
                "cell_width must be between 1 and {MAX_CELL_WIDTH}, got {}",
                self.cell_width
            );
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
