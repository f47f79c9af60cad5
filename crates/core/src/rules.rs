//! Tunable game rules: board size, speed curve, scoring and level-up behaviour.

use thiserror::Error;

use crate::types::{
    BASE_STEP_DELAY_MS, BOARD_HEIGHT, BOARD_WIDTH, LEVEL_UP_SCORE, LINE_CLEAR_POINTS,
    MIN_STEP_DELAY_MS, MULTI_LINE_BONUS, SPEED_DECAY, START_LEVEL,
};

/// Narrowest board on which every piece fits at the spawn anchor.
pub const MIN_WIDTH: u8 = 8;
pub const MAX_WIDTH: u8 = 64;
pub const MIN_HEIGHT: u8 = 4;
pub const MAX_HEIGHT: u8 = 64;

/// What happens when the score reaches `level_up_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelUpPolicy {
    /// Gain a level, zero the score and start the new level on an empty board.
    #[default]
    ResetScoreAndBoard,
    /// Keep score and board; a level is gained each time the score passes the next multiple
    /// of `level_up_score`.
    Accumulate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub width: u8,
    pub height: u8,
    /// Step interval at level 1.
    pub base_step_delay_ms: u32,
    /// The speed curve never goes below this.
    pub min_step_delay_ms: u32,
    /// Per-level multiplier of the step interval.
    pub speed_decay: f64,
    pub start_level: u32,
    pub level_up_score: u32,
    pub line_clear_points: u32,
    pub multi_line_bonus: u32,
    pub level_up: LevelUpPolicy,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_step_delay_ms: BASE_STEP_DELAY_MS,
            min_step_delay_ms: MIN_STEP_DELAY_MS,
            speed_decay: SPEED_DECAY,
            start_level: START_LEVEL,
            level_up_score: LEVEL_UP_SCORE,
            line_clear_points: LINE_CLEAR_POINTS,
            multi_line_bonus: MULTI_LINE_BONUS,
            level_up: LevelUpPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    #[error("board width {0} is outside {min}..={max}", min = MIN_WIDTH, max = MAX_WIDTH)]
    Width(u8),
    #[error("board height {0} is outside {min}..={max}", min = MIN_HEIGHT, max = MAX_HEIGHT)]
    Height(u8),
    #[error("step delays must be non-zero")]
    ZeroDelay,
    #[error("minimum step delay {min} ms exceeds the base delay {base} ms")]
    FloorAboveBase { min: u32, base: u32 },
    #[error("speed decay {0} is outside (0, 1]")]
    Decay(f64),
    #[error("level-up score must be non-zero")]
    ZeroLevelUpScore,
    #[error("levels start at 1")]
    StartLevel,
}

impl Rules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(RulesError::Width(self.width));
        }
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height) {
            return Err(RulesError::Height(self.height));
        }
        if self.base_step_delay_ms == 0 || self.min_step_delay_ms == 0 {
            return Err(RulesError::ZeroDelay);
        }
        if self.min_step_delay_ms > self.base_step_delay_ms {
            return Err(RulesError::FloorAboveBase {
                min: self.min_step_delay_ms,
                base: self.base_step_delay_ms,
            });
        }
        if !(self.speed_decay > 0.0 && self.speed_decay <= 1.0) {
            return Err(RulesError::Decay(self.speed_decay));
        }
        if self.level_up_score == 0 {
            return Err(RulesError::ZeroLevelUpScore);
        }
        if self.start_level == 0 {
            return Err(RulesError::StartLevel);
        }
        Ok(())
    }
}
