//! Round lifecycle: guessing -> revealed -> next round.
//!
//! `Game` is a plain reducer. It never touches the DOM or schedules timers;
//! actions that need a follow-up timer hand back a ticket (`Reveal`,
//! `Enhancement`) carrying the round serial and delay, and the browser glue
//! feeds the serial back when the timer fires. Tickets from an earlier round
//! are ignored.

use crate::catalog::{AnswerOption, CatalogItem, CATALOG, options_for};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::rng::RandomSource;

pub const INITIAL_ENHANCE_LEVEL: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Guessing,
    Revealed,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Guessing => "guessing",
            Phase::Revealed => "revealed",
        }
    }
}

/// How a revealed round ended. `Skipped` covers the unset correctness state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
    Skipped,
}

#[derive(Clone, Debug)]
pub struct Round {
    pub serial: u64,
    pub item: &'static CatalogItem,
    pub phase: Phase,
    pub enhancing: bool,
    pub enhance_level: u32,
    pub doom_level: u32,
    pub dramatic_effect: bool,
    pub guess: Option<String>,
    pub is_correct: Option<bool>,
}

/// Returned by `submit_guess` / `skip`: clear the reveal flash after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub serial: u64,
    pub delay_ms: u32,
}

/// Returned by `enhance`: stop enhancing after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enhancement {
    pub serial: u64,
    pub delay_ms: u32,
}

pub struct Game<R: RandomSource> {
    config: GameConfig,
    rng: R,
    round: Round,
}

impl<R: RandomSource> Game<R> {
    /// Builds the game with its first round already dealt.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let round = deal(&config, &mut rng, 1);
        Self { config, rng, round }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn start_round(&mut self) -> &Round {
        let serial = self.round.serial + 1;
        self.round = deal(&self.config, &mut self.rng, serial);
        &self.round
    }

    pub fn submit_guess(&mut self, answer: &str) -> Result<Reveal> {
        self.ensure_guessing()?;
        let round = &mut self.round;
        round.is_correct = Some(round.item.correct_answer == answer);
        round.guess = Some(answer.to_string());
        Ok(self.reveal())
    }

    pub fn skip(&mut self) -> Result<Reveal> {
        self.ensure_guessing()?;
        self.round.guess = None;
        self.round.is_correct = None;
        Ok(self.reveal())
    }

    /// Starts a cosmetic enhancement. `Ok(None)` while one is already running.
    pub fn enhance(&mut self) -> Result<Option<Enhancement>> {
        self.ensure_guessing()?;
        if self.round.enhancing {
            return Ok(None);
        }
        self.round.enhancing = true;
        self.round.enhance_level = self.round.enhance_level.saturating_add(1);
        self.round.doom_level = self.round.doom_level.saturating_add(1);
        let delay = self.rng.range_f64(
            self.config.enhance_min_ms as f64,
            self.config.enhance_max_ms as f64,
        );
        Ok(Some(Enhancement {
            serial: self.round.serial,
            delay_ms: delay as u32,
        }))
    }

    /// Returns whether the flag was cleared (false for stale serials).
    pub fn end_dramatic_effect(&mut self, serial: u64) -> bool {
        if serial != self.round.serial {
            return false;
        }
        self.round.dramatic_effect = false;
        true
    }

    pub fn end_enhancement(&mut self, serial: u64) -> bool {
        if serial != self.round.serial {
            return false;
        }
        self.round.enhancing = false;
        true
    }

    pub fn options(&self) -> &'static [AnswerOption] {
        options_for(self.round.item.kind)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.round.phase != Phase::Revealed {
            return None;
        }
        Some(match self.round.is_correct {
            Some(true) => Outcome::Correct,
            Some(false) => Outcome::Wrong,
            None => Outcome::Skipped,
        })
    }

    /// CSS transform scale for the cropped view.
    pub fn zoom_scale(&self) -> f64 {
        let bonus = if self.round.enhancing {
            self.round.enhance_level as f64 * self.config.enhance_zoom_step
        } else {
            0.0
        };
        self.round.item.scale + bonus
    }

    /// Resting zoom of the item as a whole percentage (scale 6 -> 600).
    pub fn zoom_percent(&self) -> u32 {
        (self.round.item.scale * 100.0).round() as u32
    }

    pub fn contrast_pct(&self) -> u32 {
        self.config
            .base_contrast
            .saturating_add(self.enhancing_bonus(self.config.contrast_step))
    }

    pub fn saturation_pct(&self) -> u32 {
        self.config
            .base_saturation
            .saturating_add(self.enhancing_bonus(self.config.saturation_step))
    }

    /// "ENHANCING DOOM... LEVEL n" followed by `n % 4` dots, only while enhancing.
    pub fn enhance_banner(&self) -> Option<String> {
        if !self.round.enhancing {
            return None;
        }
        let level = self.round.enhance_level;
        Some(format!(
            "ENHANCING DOOM... LEVEL {} {}",
            level,
            ".".repeat((level % 4) as usize)
        ))
    }

    fn enhancing_bonus(&self, step: u32) -> u32 {
        if self.round.enhancing {
            self.round.enhance_level.saturating_mul(step)
        } else {
            0
        }
    }

    fn ensure_guessing(&self) -> Result<()> {
        if self.round.phase != Phase::Guessing {
            return Err(GameError::NotGuessing);
        }
        Ok(())
    }

    fn reveal(&mut self) -> Reveal {
        self.round.dramatic_effect = true;
        self.round.phase = Phase::Revealed;
        Reveal {
            serial: self.round.serial,
            delay_ms: self.config.reveal_effect_ms,
        }
    }
}

fn deal<R: RandomSource>(config: &GameConfig, rng: &mut R, serial: u64) -> Round {
    let item = &CATALOG[rng.index(CATALOG.len())];
    let doom_level = rng.index(config.doom_max.max(1) as usize) as u32 + 1;
    Round {
        serial,
        item,
        phase: Phase::Guessing,
        enhancing: false,
        enhance_level: INITIAL_ENHANCE_LEVEL,
        doom_level,
        dramatic_effect: false,
        guess: None,
        is_correct: None,
    }
}
