//! Run configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use recall_core::{EngineConfig, Heading, Pose};
use recall_world::WorldConfig;
use serde::{Deserialize, Serialize};

/// Everything a run needs, loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Ticks to simulate
    #[serde(default = "default_ticks")]
    pub ticks: u64,

    /// Log progress every this many ticks (0 disables)
    #[serde(default = "default_log_every")]
    pub log_every: u64,

    /// Where the agent starts
    pub start: Pose,

    /// Plan engine tuning (the seed also drives the world)
    pub engine: EngineConfig,

    /// Grid layout and reward respawn
    pub world: WorldConfig,

    /// Final report sizes
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_by_weight")]
    pub top_by_weight: usize,

    #[serde(default = "default_top_by_length")]
    pub top_by_length: usize,
}

fn default_ticks() -> u64 {
    20_000
}
fn default_log_every() -> u64 {
    250
}
fn default_top_by_weight() -> usize {
    20
}
fn default_top_by_length() -> usize {
    10
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_by_weight: default_top_by_weight(),
            top_by_length: default_top_by_length(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            log_every: default_log_every(),
            start: Pose::new(0, 0, Heading::East),
            engine: EngineConfig::default(),
            world: WorldConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate().context("Invalid engine config")?;
        self.world.field().context("Invalid world layout")?;
        Ok(())
    }
}
