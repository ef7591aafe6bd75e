//! Match settings, loadable from TOML.
//!
//! ```toml
//! games = 20
//! max_plies = 150
//! seed = 7
//!
//! [game]
//! rows = 8
//! columns = 8
//! variant = "custom"
//! ```

use std::path::Path;

use chess_rules::{ConfigError, GameConfig};
use serde::{Deserialize, Serialize};

/// Configuration for a self-play match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies per game before declaring a draw
    pub max_plies: u32,
    /// Seed for both players; `None` draws from entropy
    pub seed: Option<u64>,
    /// Board and variant every game starts from
    pub game: GameConfig,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 200,
            seed: None,
            game: GameConfig::default(),
            verbose: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::Variant;

    #[test]
    fn nested_game_table() {
        let cfg = MatchConfig::from_toml_str(
            "games = 3\nseed = 9\n\n[game]\nrows = 10\nvariant = \"custom\"\n",
        )
        .unwrap();
        assert_eq!(cfg.games, 3);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.max_plies, 200);
        assert_eq!(cfg.game.rows, 10);
        assert_eq!(cfg.game.columns, 8);
        assert_eq!(cfg.game.variant, Variant::Custom);
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
    }

    #[test]
    fn wrong_type_is_parse_error() {
        assert!(matches!(
            MatchConfig::from_toml_str("games = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
