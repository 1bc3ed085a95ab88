//! Game configuration with documented constants
//!
//! Every tunable the flows read lives here. There is no config file; the
//! binary runs on `GameConfig::default()`.

use crate::core::error::{GameError, Result};
use std::time::Duration;

/// Configuration for the battle game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Root of the creature API, without a trailing slash
    ///
    /// by-id lookups go to `{base}/pokemon/{idOrName}`,
    /// by-type lookups go to `{base}/type/{typeName}`.
    pub api_base_url: String,

    /// Highest identifier known to exist in the source dataset
    ///
    /// Random picks are drawn uniformly from `1..=max_id`. Must be at least 2
    /// so that two distinct identifiers exist.
    pub max_id: u32,

    /// How many same-type creatures the gallery shows at most
    pub gallery_size: usize,

    /// Pause between the cosmetic battle-label changes
    ///
    /// Four pauses happen per battle. Tests set this to zero.
    pub animation_step: Duration,

    /// Label the battle control returns to after the animation
    pub battle_label: String,

    /// Seed for identifier picks and gallery shuffles
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".into(),
            max_id: 1025,
            gallery_size: 3,
            animation_step: Duration::from_secs(1),
            battle_label: "Battle".into(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Config suited to tests: no animation delay, fixed seed
    pub fn instant(seed: u64) -> Self {
        Self {
            animation_step: Duration::ZERO,
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_id < 2 {
            return Err(GameError::InvalidConfig(format!(
                "max_id must be at least 2, got {}",
                self.max_id
            )));
        }
        if self.gallery_size == 0 {
            return Err(GameError::InvalidConfig("gallery_size must be positive".into()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(GameError::InvalidConfig("api_base_url is empty".into()));
        }
        Ok(())
    }

    pub fn creature_url(&self, id_or_name: &str) -> String {
        format!("{}/pokemon/{}", self.base(), id_or_name)
    }

    pub fn type_url(&self, type_name: &str) -> String {
        format!("{}/type/{}", self.base(), type_name)
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_max_id_below_two_rejected() {
        let config = GameConfig {
            max_id: 1,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_gallery_rejected() {
        let config = GameConfig {
            gallery_size: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_urls() {
        let config = GameConfig {
            api_base_url: "http://localhost:8080/api/".into(),
            ..GameConfig::default()
        };
        assert_eq!(config.creature_url("25"), "http://localhost:8080/api/pokemon/25");
        assert_eq!(config.type_url("fire"), "http://localhost:8080/api/type/fire");
    }
}
