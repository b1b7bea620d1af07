use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::ai::{Agent, AlphaBetaAgent, MinimaxAgent, RandomAgent};
use crate::error::{BoardError, ConfigError};
use crate::game::{GameState, COLS, MAX_DIMENSION, ROWS};

/// Which search engine drives a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    Minimax,
    AlphaBeta,
    Random,
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(EngineKind::Minimax),
            "alpha-beta" | "alphabeta" => Ok(EngineKind::AlphaBeta),
            "random" => Ok(EngineKind::Random),
            other => Err(format!(
                "unknown engine '{other}' (expected 'minimax', 'alpha-beta', or 'random')"
            )),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineKind::Minimax => "minimax",
            EngineKind::AlphaBeta => "alpha-beta",
            EngineKind::Random => "random",
        };
        f.write_str(name)
    }
}

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl BoardConfig {
    /// Empty starting position on the configured board.
    pub fn initial_state(&self) -> Result<GameState, BoardError> {
        GameState::with_dimensions(self.rows, self.cols)
    }
}

/// How one side chooses its moves.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub engine: EngineKind,
    /// Search depth below the root's successors. Absent means unbounded for
    /// minimax; alpha-beta requires it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Seed for the random engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            engine: EngineKind::Minimax,
            depth: None,
            seed: None,
        }
    }
}

impl AgentConfig {
    fn validate(&self, side: &str) -> Result<(), ConfigError> {
        if self.engine == EngineKind::AlphaBeta && self.depth.is_none() {
            return Err(ConfigError::Validation(format!(
                "{side}.depth is required for the alpha-beta engine"
            )));
        }
        Ok(())
    }

    /// Build the agent this configuration describes.
    pub fn build(&self) -> Result<Box<dyn Agent>, ConfigError> {
        let agent: Box<dyn Agent> = match self.engine {
            EngineKind::Minimax => Box::new(MinimaxAgent::new(self.depth)),
            EngineKind::AlphaBeta => {
                let depth = self.depth.ok_or_else(|| {
                    ConfigError::Validation("depth is required for the alpha-beta engine".into())
                })?;
                Box::new(AlphaBetaAgent::new(depth))
            }
            EngineKind::Random => match self.seed {
                Some(seed) => Box::new(RandomAgent::seeded(seed)),
                None => Box::new(RandomAgent::new()),
            },
        };
        Ok(agent)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub red: AgentConfig,
    pub blue: AgentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            red: AgentConfig {
                engine: EngineKind::AlphaBeta,
                depth: Some(4),
                seed: None,
            },
            blue: AgentConfig {
                engine: EngineKind::Minimax,
                depth: Some(4),
                seed: None,
            },
        }
    }
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 || self.board.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in 1..={MAX_DIMENSION}"
            )));
        }
        if self.board.cols == 0 || self.board.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in 1..={MAX_DIMENSION}"
            )));
        }
        self.red.validate("red")?;
        self.blue.validate("blue")?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
