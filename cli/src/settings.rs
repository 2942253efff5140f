use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sweeper_core::{CellCount, ControllerConfig, Coord, DEFAULT_SIZE, GameConfig, MIN_MINES};

/// Session settings, read from an optional TOML file and overridden by flags.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub size: Option<Coord>,
    pub mines: Option<i64>,
    pub seed: Option<u64>,
    pub ai: ControllerConfig,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Board config with the mine count clamped the same way as any player choice.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(
            self.size.unwrap_or(DEFAULT_SIZE),
            self.mines.unwrap_or(i64::from(MIN_MINES)),
        )
    }

    pub fn mines_or(&self, fallback: CellCount) -> i64 {
        self.mines.unwrap_or(i64::from(fallback))
    }
}
