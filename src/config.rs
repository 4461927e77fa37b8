use std::path::Path;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;
use crate::eval::{DirectionSet, Evaluator, PatternConfig, PatternTable, DEFAULT_DEFENSE_WEIGHT};
use crate::search::{MoveOrderer, OrderingPolicy, Searcher, DEFAULT_DEPTH, MAX_DEPTH, SCORE_BOUND};

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board side length for new sessions
    pub board_size: u8,
    /// Search depth in plies
    pub depth: u8,
    /// Multiplier on the human side's board score
    pub defense_weight: f64,
    pub ordering: OrderingPolicy,
    pub directions: DirectionSet,
    pub patterns: PatternConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: DEFAULT_BOARD_SIZE,
            depth: DEFAULT_DEPTH,
            defense_weight: DEFAULT_DEFENSE_WEIGHT,
            ordering: OrderingPolicy::default(),
            directions: DirectionSet::default(),
            patterns: PatternConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
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

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::Validation(format!(
                "depth must be in 1..={MAX_DEPTH}"
            )));
        }
        if !(5..=64).contains(&self.board_size) {
            return Err(ConfigError::Validation(
                "board_size must be in 5..=64".into(),
            ));
        }
        if !self.defense_weight.is_finite() || self.defense_weight < 0.0 {
            return Err(ConfigError::Validation(
                "defense_weight must be finite and >= 0".into(),
            ));
        }
        self.patterns.check().map_err(ConfigError::Validation)?;

        // Every stone on a full board scoring a win, weighted, must stay
        // inside the search bound.
        let cells = f64::from(self.board_size) * f64::from(self.board_size);
        #[allow(clippy::cast_precision_loss)]
        let (win, bound) = (self.patterns.win_score as f64, SCORE_BOUND as f64);
        if win * cells * self.defense_weight.max(1.0) >= bound {
            return Err(ConfigError::Validation(format!(
                "win_score {} with defense_weight {} can exceed the search bound on a {}x{} board",
                self.patterns.win_score, self.defense_weight, self.board_size, self.board_size
            )));
        }
        Ok(())
    }

    /// Evaluator for this configuration. The default pattern set shares the
    /// process-wide table.
    pub fn evaluator(&self) -> Evaluator {
        let table = if self.patterns == PatternConfig::default() {
            PatternTable::standard()
        } else {
            Arc::new(PatternTable::new(&self.patterns))
        };
        Evaluator::with_table(table, self.directions, self.defense_weight)
    }

    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.evaluator(), MoveOrderer::new(self.ordering))
    }
}
