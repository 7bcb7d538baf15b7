use std::path::Path;

use crate::ai::{
    CountHeuristic, Heuristic, LinePowerHeuristic, MinimaxAgent, OpenLineHeuristic, Strategy,
    ThreatHeuristic,
};
use crate::error::ConfigError;
use crate::game::{CubeState, GameState};

/// Which evaluator drives the 4x4 search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic2d {
    Count,
    LinePower,
    #[default]
    OpenLine,
}

/// Which evaluator drives the 4x4x4 search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic3d {
    OpenLine,
    #[default]
    Threat,
}

/// Search settings for both board variants.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub depth_2d: usize,
    pub depth_3d: usize,
    pub heuristic_2d: Heuristic2d,
    pub heuristic_3d: Heuristic3d,
    pub threat_base: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::AlphaBeta,
            depth_2d: 3,
            // 64-wide branching: one ply is the deliberate budget here
            depth_3d: 1,
            heuristic_2d: Heuristic2d::OpenLine,
            heuristic_3d: Heuristic3d::Threat,
            threat_base: 80.0,
        }
    }
}

impl SearchConfig {
    /// Build the configured agent for the 4x4 board.
    pub fn agent_2d(&self) -> MinimaxAgent<GameState> {
        let heuristic: Box<dyn Heuristic<GameState>> = match self.heuristic_2d {
            Heuristic2d::Count => Box::new(CountHeuristic),
            Heuristic2d::LinePower => Box::new(LinePowerHeuristic),
            Heuristic2d::OpenLine => Box::new(OpenLineHeuristic::default()),
        };
        MinimaxAgent::with_heuristic(self.depth_2d, self.strategy, heuristic)
    }

    /// Build the configured agent for the 4x4x4 cube.
    pub fn agent_3d(&self) -> MinimaxAgent<CubeState> {
        let heuristic: Box<dyn Heuristic<CubeState>> = match self.heuristic_3d {
            Heuristic3d::OpenLine => Box::new(OpenLineHeuristic::default()),
            Heuristic3d::Threat => Box::new(ThreatHeuristic {
                base: self.threat_base,
            }),
        };
        MinimaxAgent::with_heuristic(self.depth_3d, self.strategy, heuristic)
    }
}

/// Settings for headless match series.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig { games: 20 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth_2d == 0 {
            return Err(ConfigError::Validation(
                "search.depth_2d must be >= 1".into(),
            ));
        }
        if self.search.depth_3d == 0 {
            return Err(ConfigError::Validation(
                "search.depth_3d must be >= 1".into(),
            ));
        }
        if self.search.threat_base <= 1.0 {
            return Err(ConfigError::Validation(
                "search.threat_base must be > 1".into(),
            ));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be >= 1".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
