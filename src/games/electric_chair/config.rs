//! Construction parameters of the electric chair game.
//!
//! Parameters are fixed when the game is created; the tree never changes
//! them afterwards. They can be built in code or loaded from JSON.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::games::electric_chair::chairs::{ChairSet, MAX_CHAIR};

/// Parameters of one electric chair game.
///
/// # Example
/// ```
/// use chair_tree::games::electric_chair::ChairGameConfig;
///
/// let config = ChairGameConfig::default();
/// assert_eq!(config.num_chairs, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChairGameConfig {
    /// Chairs are numbered `1..=num_chairs`; a chair's number is its score.
    #[serde(default = "default_num_chairs")]
    pub num_chairs: u8,

    /// Lives each player starts with.
    #[serde(default = "default_max_life")]
    pub max_life: u8,

    /// Score that ends the game in favor of the player reaching it.
    #[serde(default = "default_winning_score")]
    pub winning_score: u32,
}

fn default_num_chairs() -> u8 {
    12
}

fn default_max_life() -> u8 {
    2
}

fn default_winning_score() -> u32 {
    10
}

impl Default for ChairGameConfig {
    fn default() -> Self {
        Self {
            num_chairs: default_num_chairs(),
            max_life: default_max_life(),
            winning_score: default_winning_score(),
        }
    }
}

impl ChairGameConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Three chairs, one life, three points to win. Small enough to check
    /// by hand.
    pub fn small() -> Self {
        Self {
            num_chairs: 3,
            max_life: 1,
            winning_score: 3,
        }
    }

    /// Twelve chairs, three lives, forty points: the full tabletop game.
    pub fn classic() -> Self {
        Self {
            num_chairs: 12,
            max_life: 3,
            winning_score: 40,
        }
    }

    /// Builder method: set the number of chairs.
    pub fn with_chairs(mut self, num_chairs: u8) -> Self {
        self.num_chairs = num_chairs;
        self
    }

    /// Builder method: set the starting lives.
    pub fn with_max_life(mut self, max_life: u8) -> Self {
        self.max_life = max_life;
        self
    }

    /// Builder method: set the winning score.
    pub fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.winning_score = winning_score;
        self
    }

    /// The initial chair pool.
    pub fn chairs(&self) -> ChairSet {
        ChairSet::full(self.num_chairs.min(MAX_CHAIR))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_chairs == 0 || self.num_chairs > MAX_CHAIR {
            return Err(ConfigError::InvalidValue {
                field: "num_chairs".to_string(),
                message: format!("must be between 1 and {}", MAX_CHAIR),
            });
        }

        if self.max_life == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_life".to_string(),
                message: "players need at least one life".to_string(),
            });
        }

        if self.winning_score == 0 {
            return Err(ConfigError::InvalidValue {
                field: "winning_score".to_string(),
                message: "must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// Upper bound on the number of nodes in the built graph.
    ///
    /// This is the size of the plain tree (no merging of equal states) when
    /// only running out of lives ends the game. Every commit node branches
    /// once per remaining chair; every resolve node has one hit branch and
    /// one safe branch per other chair. Saturates at `u128::MAX`.
    pub fn node_bound(&self) -> u128 {
        let mut memo = FxHashMap::default();
        commit_subtree(
            u32::from(self.num_chairs),
            self.max_life,
            self.max_life,
            &mut memo,
        )
    }
}

/// Tree size below a commit node with `chairs` left, where the upcoming
/// resolver has `resolver` lives and the committer has `committer` lives.
fn commit_subtree(
    chairs: u32,
    resolver: u8,
    committer: u8,
    memo: &mut FxHashMap<(u32, u8, u8), u128>,
) -> u128 {
    if let Some(&size) = memo.get(&(chairs, resolver, committer)) {
        return size;
    }

    let size = if chairs == 0 {
        1
    } else {
        // the resolver commits next round
        let hit = if resolver <= 1 {
            1
        } else {
            commit_subtree(chairs, committer, resolver - 1, memo)
        };
        let safe = commit_subtree(chairs - 1, committer, resolver, memo);
        let resolve = 1u128
            .saturating_add(hit)
            .saturating_add(u128::from(chairs - 1).saturating_mul(safe));
        1u128.saturating_add(u128::from(chairs).saturating_mul(resolve))
    };

    memo.insert((chairs, resolver, committer), size);
    size
}

/// Configuration error types.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The configuration file could not be read.
    IoError(String),
    /// The configuration is not valid JSON for [`ChairGameConfig`].
    ParseError(String),
    /// A field holds a value outside its allowed range.
    InvalidValue {
        /// Offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {}", e),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChairGameConfig::default();
        assert_eq!(config.num_chairs, 12);
        assert_eq!(config.max_life, 2);
        assert_eq!(config.winning_score, 10);
        assert!(config.validate().is_ok());
        assert_eq!(config.chairs().len(), 12);
    }

    #[test]
    fn test_parse_config() {
        let config = ChairGameConfig::from_json_str(
            r#"{ "num_chairs": 5, "max_life": 3, "winning_score": 12 }"#,
        )
        .unwrap();
        assert_eq!(config, ChairGameConfig::new().with_chairs(5).with_max_life(3).with_winning_score(12));
    }

    #[test]
    fn test_minimal_config() {
        let config = ChairGameConfig::from_json_str(r#"{ "num_chairs": 4 }"#).unwrap();
        assert_eq!(config.num_chairs, 4);
        // Defaults should be applied
        assert_eq!(config.max_life, 2);
        assert_eq!(config.winning_score, 10);
    }

    #[test]
    fn test_validation_fails() {
        assert!(ChairGameConfig::new().with_chairs(0).validate().is_err());
        assert!(ChairGameConfig::new().with_chairs(64).validate().is_err());
        assert!(ChairGameConfig::new().with_max_life(0).validate().is_err());
        assert!(ChairGameConfig::new().with_winning_score(0).validate().is_err());

        let err = ChairGameConfig::from_json_str(r#"{ "max_life": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("max_life"));
    }

    #[test]
    fn test_parse_error() {
        let err = ChairGameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ChairGameConfig::from_json_file("/nonexistent/chairs.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_node_bound_small_cases() {
        // commit, resolve, hit
        assert_eq!(ChairGameConfig::new().with_chairs(1).with_max_life(1).node_bound(), 3);
        // root + 2 * (resolve + hit + 3-node safe subtree)
        assert_eq!(ChairGameConfig::new().with_chairs(2).with_max_life(1).node_bound(), 11);
    }

    #[test]
    fn test_node_bound_grows() {
        let small = ChairGameConfig::small().node_bound();
        let more_life = ChairGameConfig::small().with_max_life(2).node_bound();
        let more_chairs = ChairGameConfig::small().with_chairs(4).node_bound();
        assert!(more_life > small);
        assert!(more_chairs > small);
        assert!(ChairGameConfig::new().with_chairs(MAX_CHAIR).node_bound() > 0);
    }
}
