//! Game configuration
//!
//! Playfield dimensions, host-supplied paddle aspect ratio and RNG seed.
//! Loaded from JSON; every field is optional and falls back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigResult, require_positive};

/// Default RNG seed
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Settings fixed for the lifetime of a `Game`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield (canvas) width
    pub playfield_width: f32,
    /// Playfield (canvas) height
    pub playfield_height: f32,
    /// Paddle sprite height / width
    pub paddle_aspect_ratio: f32,
    /// Seed for power-up drops
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            paddle_aspect_ratio: DEFAULT_PADDLE_ASPECT,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Create a default config with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()
    }

    /// Parse a JSON config, logging and falling back to defaults on failure
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log::info!(
                    "Loaded config: {}x{} playfield, seed {}",
                    config.playfield_width,
                    config.playfield_height,
                    config.seed
                );
                config
            }
            Err(err) => {
                log::warn!("Using default config: {}", err);
                Self::default()
            }
        }
    }

    /// Reject dimensions the layout cannot work with
    pub fn validate(self) -> ConfigResult<Self> {
        require_positive("playfield_width", self.playfield_width)?;
        require_positive("playfield_height", self.playfield_height)?;
        require_positive("paddle_aspect_ratio", self.paddle_aspect_ratio)?;
        Ok(self)
    }

    /// Center of the playfield
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.playfield_width / 2.0, self.playfield_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.playfield_width, PLAYFIELD_WIDTH);
        assert_eq!(config.paddle_aspect_ratio, DEFAULT_PADDLE_ASPECT);
    }

    #[test]
    fn test_invalid_dimension_rejected() {
        let err = GameConfig::from_json(r#"{ "playfield_height": -10.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "playfield_height",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let config = GameConfig::load_or_default("{ not json");
        assert_eq!(config, GameConfig::default());
    }
}
