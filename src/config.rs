//! Runtime tuning for rounds, timers and the enhance effect.
//!
//! Every field has a default, so a JSON override only needs the keys it
//! changes (feature `serde_json`).

use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// How long the red reveal flash stays on after a guess or skip.
    pub reveal_effect_ms: u32,
    /// Enhance runs for a random duration in `[enhance_min_ms, enhance_max_ms)`.
    pub enhance_min_ms: u32,
    pub enhance_max_ms: u32,
    /// Doom level rolled at round start is uniform in `1..=doom_max`.
    pub doom_max: u32,
    pub enhance_zoom_step: f64,
    pub base_contrast: u32,
    pub contrast_step: u32,
    pub base_saturation: u32,
    pub saturation_step: u32,
    /// Id of the element the game renders into; created when missing.
    pub root_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_effect_ms: 1500,
            enhance_min_ms: 3000,
            enhance_max_ms: 6000,
            doom_max: 5,
            enhance_zoom_step: 0.3,
            base_contrast: 120,
            contrast_step: 10,
            base_saturation: 100,
            saturation_step: 20,
            root_id: "zd-root".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.enhance_min_ms > self.enhance_max_ms {
            return Err(GameError::InvalidConfig(format!(
                "enhance_min_ms ({}) exceeds enhance_max_ms ({})",
                self.enhance_min_ms, self.enhance_max_ms
            )));
        }
        if self.doom_max == 0 {
            return Err(GameError::InvalidConfig("doom_max must be at least 1".into()));
        }
        if self.root_id.trim().is_empty() {
            return Err(GameError::InvalidConfig("root_id is empty".into()));
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
